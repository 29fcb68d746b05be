// Application state for HTTP handlers
use crate::application::fleet_service::FleetService;
use crate::application::patient_service::PatientService;
use crate::application::status_service::StatusService;

#[derive(Clone)]
pub struct AppState {
    pub fleet_service: FleetService,
    pub status_service: StatusService,
    pub patient_service: PatientService,
    pub compress_responses: bool,
}
