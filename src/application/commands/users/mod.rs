mod forgot_password;
mod heart;
mod login;
mod password;
mod register;
mod reset_password;
mod service;
mod update_account;

pub use forgot_password::ForgotPasswordCommand;
pub use login::AuthenticateUserCommand;
pub use register::RegisterUserCommand;
pub use reset_password::ResetPasswordCommand;
pub use service::UserCommandService;
pub use update_account::UpdateAccountCommand;
