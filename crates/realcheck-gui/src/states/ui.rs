/// UI-only state that is not part of the detection workflow.
#[derive(Default)]
pub struct UIState {
    /// Pending transport alert; shown as a modal until dismissed.
    pub alert: Option<String>,

    /// Endpoint text being edited in the Service section.
    pub endpoint_input: String,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
