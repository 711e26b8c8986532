//! Built-in mail drivers.
//!
//! Only [`SmtpDriver`] is registered by
//! [`crate::mail::services::MailDriverRegistry::with_builtin_drivers`]; the
//! remaining drivers are available for bootstrap code to register under
//! whichever name it chooses.

mod log;
mod null;
mod sendmail;
mod smtp;

pub use log::LogDriver;
pub use null::NullDriver;
pub use sendmail::SendmailDriver;
pub use smtp::SmtpDriver;
