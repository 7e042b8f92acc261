pub mod registry_service;
pub mod vision_service;

pub use registry_service::RegistryLookupService;
pub use vision_service::VisionService;
