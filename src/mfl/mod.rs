//! MyFantasyLeague API client: requests, transport, sessions and normalization.

pub mod http;
pub mod normalize;
pub mod request;
pub mod response;
pub mod session;
pub mod types;

pub use http::{HttpTransport, RawResponse, Transport};
pub use request::{ApiConfig, EndpointKind, MflRequest, PlayerScoresQuery};
pub use response::{Export, ExportResponse, LoginResponse};
pub use session::{AuthState, Credentials, Session, AUTH_COOKIE};
