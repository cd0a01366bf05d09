//! Navigation Port - lets application workflows leave the current screen
//! without depending on the router.

/// Screens a workflow can send the user to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    MainMenu,
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait NavigationPort {
    fn navigate(&self, destination: Destination);
}
