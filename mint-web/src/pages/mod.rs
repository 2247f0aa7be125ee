//! Page modules - the dApp is a single page

pub mod home;

pub use home::HomePage;
