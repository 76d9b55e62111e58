pub mod loaders;
pub mod profile;
pub mod settings;
pub mod shortlist;

pub use loaders::load_settings;
pub use profile::{
    CandidateRef, DesignAttribute, DriverStats, ManagerRef, ManagerRoster, ProfileAttributes,
    Role, StaffProfile,
};
pub use settings::{Criteria, Identity, Settings, Snapshot};
pub use shortlist::{ShortlistCategory, ShortlistTarget};
