mod auth;
pub use self::auth::{RequestTokenResponse, SessionResponse};
pub(crate) use self::auth::{NewSessionBody, ValidateWithLoginBody};

mod meta;
pub use self::meta::Page;

mod movie;
pub use self::movie::{Movie, MovieID};
