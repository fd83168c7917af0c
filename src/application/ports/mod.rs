// src/application/ports/mod.rs
pub mod mail;
pub mod security;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type PasswordHasherPort = dyn security::PasswordHasher;
pub type ResetTokenSourcePort = dyn security::ResetTokenSource;
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
pub type MailSenderPort = dyn mail::MailSender;
