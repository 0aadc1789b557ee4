pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
#[cfg(any(test, feature = "mock"))]
mod mock;

pub use r#trait::CartRepository;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockCartRepository;
#[cfg(any(test, feature = "mock"))]
pub(crate) use mock::CartStore;
