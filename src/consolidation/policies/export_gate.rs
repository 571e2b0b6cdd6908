/// The only create-solution status that lets the workflow continue
pub const CREATE_SUCCESS_STATUS: u16 = 200;

/// ExportGate decides whether a created solution is exported
///
/// Only a literal 200 from the create call opens the gate. Any other status,
/// other 2xx codes included, stops the workflow without raising an error.
pub struct ExportGate;

impl ExportGate {
    pub fn allows_export(create_status: u16) -> bool {
        create_status == CREATE_SUCCESS_STATUS
    }
}
