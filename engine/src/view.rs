use handcount_types::{HandGroups, Number};

/// Rendering callbacks the host provides when a round starts.
pub trait RoundView {
    fn render_hands(&mut self, hands: &HandGroups);
    fn render_options(&mut self, options: &[Number]);
    fn reset_feedback(&mut self);
}
