mod compare;
mod home;
mod progress;
mod stack;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use compare::CompareView;
pub use home::HomeView;
pub use progress::ProgressView;
pub use stack::StackView;
