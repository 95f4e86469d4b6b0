//! The views module contains the components for all Layouts and Routes for our app. Each layout and route in our [`Route`]
//! enum will render one of these components.
//!
//! The [`Navbar`] component will be rendered on all pages of our app since every page is under the layout.

mod home;
pub use home::Home;

mod navbar;
pub use navbar::Navbar;

mod create_post;
pub use create_post::CreatePost;

mod post;
pub use post::PostPage;

mod not_found;
pub use not_found::NotFound;
