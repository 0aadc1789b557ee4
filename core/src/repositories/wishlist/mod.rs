pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
#[cfg(any(test, feature = "mock"))]
mod mock;

pub use r#trait::WishlistRepository;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockWishlistRepository;
