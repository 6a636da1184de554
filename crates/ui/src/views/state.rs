/// Lifecycle of data a screen fetches asynchronously.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
}
