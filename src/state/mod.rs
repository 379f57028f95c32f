// ============================================================================
// STATE MODULE - Estado por instancia con Rc<RefCell>
// ============================================================================

pub mod dashboard_state;
pub mod bill_file_state;
pub mod navigation_state;

pub use dashboard_state::{DashboardState, EditToggle, ListToggle};
pub use bill_file_state::{BillFileState, UploadedFile};
pub use navigation_state::NavigationState;
