//! Home screen greeting toggle

/// Restaurant title shown above the greeting
pub const TITLE: &str = "Наш Ресторан";

/// Greeting shown when the home screen is created
pub const WELCOME: &str = "Добро пожаловать в наш ресторан";

/// Greeting shown after the button has been pressed
pub const THANKS: &str = "Спасибо, что посетили наш ресторан!";

/// Label of the home screen button
pub const BUTTON_LABEL: &str = "Нажмите меня";

/// Two-state greeting. Lives as long as the home screen that owns it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Greeting {
    #[default]
    Initial,
    Acknowledged,
}

impl Greeting {
    pub fn new() -> Self {
        Self::Initial
    }

    /// Button press. Always lands on `Acknowledged`.
    pub fn press(self) -> Self {
        Greeting::Acknowledged
    }

    pub fn text(&self) -> &'static str {
        match self {
            Greeting::Initial => WELCOME,
            Greeting::Acknowledged => THANKS,
        }
    }
}
