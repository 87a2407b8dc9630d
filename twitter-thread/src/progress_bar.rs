/// Progress reporting hooks, implemented by the frontend.
///
/// `total` is `None` when the amount of work is not known up front, such as
/// while walking a reply chain.
pub trait ProgressBar {
    fn init(total: Option<usize>, description: &str) -> Self;
    fn increment(&self);
    fn warn(self, msg: &str);
    fn destroy(self);
}

/// Reports nothing.
pub struct NoProgress;

impl ProgressBar for NoProgress {
    fn init(_total: Option<usize>, _description: &str) -> Self {
        Self
    }

    fn increment(&self) {}

    fn warn(self, _msg: &str) {}

    fn destroy(self) {}
}
