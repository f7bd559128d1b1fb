pub mod app;
pub mod forgot_password_screen;
pub mod login_screen;
pub mod main_screen;
pub mod register_screen;
pub mod welcome_screen;

pub use app::App;
pub use forgot_password_screen::ForgotPasswordScreen;
pub use login_screen::LoginScreen;
pub use main_screen::MainScreen;
pub use register_screen::RegisterScreen;
pub use welcome_screen::WelcomeScreen;
