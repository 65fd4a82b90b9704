use metrics::counter;

use super::InternalEvent;
use crate::MetricOp;

#[derive(Debug)]
pub struct FanoutSinkPanicked<'a> {
    pub index: usize,
    pub op: MetricOp,
    pub error: &'a str,
}

impl InternalEvent for FanoutSinkPanicked<'_> {
    fn emit_logs(&self) {
        error!(
            message = "Sink panicked while handling a metric; continuing with the remaining sinks.",
            index = self.index,
            op = %self.op,
            error = %self.error,
            error_type = "panic",
            stage = "sending",
        );
    }

    fn emit_metrics(&self) {
        counter!(
            "component_errors_total",
            "component_kind" => "fanout",
            "op" => self.op.as_str(),
            "error_type" => "panic",
            "stage" => "sending",
        )
        .increment(1);
    }
}
