//! Page copy and asset paths

pub const PAGE_TITLE: &str = "LW3Punks";
pub const HEADING: &str = "Welcome to LW3Punks!";
pub const DESCRIPTION: &str = "It's an NFT collection for LearnWeb3 students.";
pub const PREVIEW_IMAGE: &str = "./LW3Punks/1.png";
pub const PREVIEW_ALT: &str = "LW3Punks NFT example";
pub const FOOTER_TEXT: &str = "Made with ❤ by LW3Punks";
