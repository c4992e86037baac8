pub mod analysis;
pub mod auth;
pub mod contact;
pub mod fleet;
pub mod session;
pub mod validate;

pub use analysis::{AnalysisResult, AnalyzeResponse, EnvironmentalImpact, MaterialShare};
pub use auth::{AuthResponse, AuthUser, ErrorResponse, LoginRequest, RegisterRequest};
pub use contact::{ContactRequest, ContactResponse};
pub use fleet::{GeoPoint, VehicleKind, VehicleStatus, WasteVehicle};
pub use session::{Phase, UploadSession};
