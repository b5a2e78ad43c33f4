//! Application state for the TUI
//!
//! The App struct is the controller between terminal events and the
//! teller: key presses fill form fields and submit operations, ticks
//! advance the clock, and the views render whatever the teller reports
//! afterward. Rejections become transient status messages; state is
//! otherwise untouched, mirroring the silent-failure feel of a bank form
//! that simply does not react.

use crate::services::Teller;

use super::widgets::TextInput;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Dashboard,
}

/// Which form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    LoginUser,
    LoginPin,
    TransferTo,
    TransferAmount,
    LoanAmount,
    CloseUser,
    ClosePin,
}

impl Field {
    /// Next field for Tab navigation, cycling within the current screen
    pub fn next(self) -> Self {
        match self {
            Self::LoginUser => Self::LoginPin,
            Self::LoginPin => Self::LoginUser,
            Self::TransferTo => Self::TransferAmount,
            Self::TransferAmount => Self::LoanAmount,
            Self::LoanAmount => Self::CloseUser,
            Self::CloseUser => Self::ClosePin,
            Self::ClosePin => Self::TransferTo,
        }
    }

    /// Previous field for Shift+Tab navigation
    pub fn prev(self) -> Self {
        match self {
            Self::LoginUser => Self::LoginPin,
            Self::LoginPin => Self::LoginUser,
            Self::TransferTo => Self::ClosePin,
            Self::TransferAmount => Self::TransferTo,
            Self::LoanAmount => Self::TransferAmount,
            Self::CloseUser => Self::LoanAmount,
            Self::ClosePin => Self::CloseUser,
        }
    }
}

/// Main application state
pub struct App {
    /// The transaction engine
    pub teller: Teller,

    /// Current screen
    pub screen: Screen,

    /// Focused form field
    pub focused: Field,

    /// Login form
    pub login_user: TextInput,
    pub login_pin: TextInput,

    /// Transfer form
    pub transfer_to: TextInput,
    pub transfer_amount: TextInput,

    /// Loan form
    pub loan_amount: TextInput,

    /// Close-account form
    pub close_user: TextInput,
    pub close_pin: TextInput,

    /// Greeting and login timestamp for the dashboard header
    pub welcome_line: Option<String>,

    /// Transient status message
    pub status_message: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create the app over a teller, starting at the login screen
    pub fn new(teller: Teller) -> Self {
        let mut app = Self {
            teller,
            screen: Screen::Login,
            focused: Field::LoginUser,
            login_user: TextInput::new().label("User").placeholder("username"),
            login_pin: TextInput::new().label("PIN").placeholder("····").masked(),
            transfer_to: TextInput::new().label("To").placeholder("recipient"),
            transfer_amount: TextInput::new().label("Amount").placeholder("0.00"),
            loan_amount: TextInput::new().label("Amount").placeholder("0.00"),
            close_user: TextInput::new().label("User").placeholder("confirm user"),
            close_pin: TextInput::new().label("PIN").placeholder("····").masked(),
            welcome_line: None,
            status_message: None,
            should_quit: false,
        };
        app.login_user.focused = true;
        app
    }

    /// Mutable access to the focused input
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused {
            Field::LoginUser => &mut self.login_user,
            Field::LoginPin => &mut self.login_pin,
            Field::TransferTo => &mut self.transfer_to,
            Field::TransferAmount => &mut self.transfer_amount,
            Field::LoanAmount => &mut self.loan_amount,
            Field::CloseUser => &mut self.close_user,
            Field::ClosePin => &mut self.close_pin,
        }
    }

    /// Move focus to `field`, updating widget focus flags
    pub fn focus(&mut self, field: Field) {
        self.focused_input().focused = false;
        self.focused = field;
        self.focused_input().focused = true;
    }

    /// Submit the login form
    ///
    /// Both fields clear regardless of outcome, so a failed attempt looks
    /// like an ignored one.
    pub fn submit_login(&mut self) {
        let result = self
            .teller
            .login(self.login_user.value(), self.login_pin.value());
        self.login_user.clear();
        self.login_pin.clear();

        match result {
            Ok(welcome) => {
                let first_name = welcome.owner.split(' ').next().unwrap_or(&welcome.owner);
                let stamp = crate::display::format_login_stamp(welcome.logged_in_at, &welcome.locale);
                self.welcome_line = Some(format!("Welcome back, {}!  {}", first_name, stamp));
                self.status_message = None;
                self.screen = Screen::Dashboard;
                self.focus(Field::TransferTo);
            }
            Err(rejection) => {
                self.status_message = Some(rejection.to_string());
            }
        }
    }

    /// Submit the transfer form
    pub fn submit_transfer(&mut self) {
        let result = self
            .teller
            .transfer(self.transfer_to.value(), self.transfer_amount.value());
        self.transfer_to.clear();
        self.transfer_amount.clear();

        self.status_message = Some(match result {
            Ok(()) => "Transfer sent".to_string(),
            Err(rejection) => rejection.to_string(),
        });
    }

    /// Submit the loan form
    pub fn submit_loan(&mut self) {
        let result = self.teller.request_loan(self.loan_amount.value());
        self.loan_amount.clear();

        self.status_message = Some(match result {
            Ok(()) => "Loan approved, processing...".to_string(),
            Err(rejection) => rejection.to_string(),
        });
    }

    /// Submit the close-account form
    pub fn submit_close(&mut self) {
        let result = self
            .teller
            .close_account(self.close_user.value(), self.close_pin.value());
        self.close_user.clear();
        self.close_pin.clear();

        match result {
            Ok(()) => {
                self.back_to_login(Some("Account closed".to_string()));
            }
            Err(rejection) => {
                self.status_message = Some(rejection.to_string());
            }
        }
    }

    /// Explicit logout
    pub fn logout(&mut self) {
        self.teller.logout();
        self.back_to_login(None);
    }

    /// Advance one time unit
    pub fn on_tick(&mut self) {
        let outcome = self.teller.tick();

        if outcome.session_expired {
            self.back_to_login(Some("Log in to get started".to_string()));
            return;
        }

        if !outcome.posted_loans.is_empty() && self.teller.current_session().is_some() {
            self.status_message = Some("Loan received".to_string());
        }
    }

    fn back_to_login(&mut self, message: Option<String>) {
        self.screen = Screen::Login;
        self.welcome_line = None;
        self.status_message = message;
        self.transfer_to.clear();
        self.transfer_amount.clear();
        self.loan_amount.clear();
        self.close_user.clear();
        self.close_pin.clear();
        self.focus(Field::LoginUser);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AccountStore;

    fn app() -> App {
        App::new(Teller::with_policy(AccountStore::seed(), 120, 3))
    }

    fn type_into(app: &mut App, field: Field, text: &str) {
        app.focus(field);
        for c in text.chars() {
            app.focused_input().insert(c);
        }
    }

    #[test]
    fn test_login_flow() {
        let mut app = app();
        type_into(&mut app, Field::LoginUser, "js");
        type_into(&mut app, Field::LoginPin, "1111");

        app.submit_login();

        assert_eq!(app.screen, Screen::Dashboard);
        assert!(app.welcome_line.as_deref().unwrap().contains("Jonas"));
        assert_eq!(app.login_user.value(), "");
        assert_eq!(app.login_pin.value(), "");
    }

    #[test]
    fn test_failed_login_clears_fields_and_stays() {
        let mut app = app();
        type_into(&mut app, Field::LoginUser, "js");
        type_into(&mut app, Field::LoginPin, "9999");

        app.submit_login();

        assert_eq!(app.screen, Screen::Login);
        assert_eq!(app.login_pin.value(), "");
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_expiry_returns_to_login() {
        let mut app = App::new(Teller::with_policy(AccountStore::seed(), 1, 3));
        type_into(&mut app, Field::LoginUser, "js");
        type_into(&mut app, Field::LoginPin, "1111");
        app.submit_login();

        app.on_tick();

        assert_eq!(app.screen, Screen::Login);
        assert_eq!(app.status_message.as_deref(), Some("Log in to get started"));
    }

    #[test]
    fn test_close_returns_to_login() {
        let mut app = app();
        type_into(&mut app, Field::LoginUser, "js");
        type_into(&mut app, Field::LoginPin, "1111");
        app.submit_login();

        type_into(&mut app, Field::CloseUser, "js");
        type_into(&mut app, Field::ClosePin, "1111");
        app.submit_close();

        assert_eq!(app.screen, Screen::Login);
        assert_eq!(app.teller.store().len(), 1);
    }

    #[test]
    fn test_field_cycle_on_dashboard() {
        assert_eq!(Field::TransferTo.next(), Field::TransferAmount);
        assert_eq!(Field::ClosePin.next(), Field::TransferTo);
        assert_eq!(Field::TransferTo.prev(), Field::ClosePin);
    }
}
