/// The blocking user-facing surfaces the form needs: a dismiss-only
/// notification and a yes/no confirmation.
pub trait Prompt {
    fn alert(&mut self, message: &str);

    fn confirm(&mut self, question: &str) -> bool;
}
