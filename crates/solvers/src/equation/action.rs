/// Control actions supported by the root finders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop iterating, record the terminal bracket, and return.
    StopEarly,
}
