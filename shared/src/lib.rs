use serde::{Deserialize, Serialize};

/// Schedule ("horario") as returned by `GET /horarios/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSchedule {
    pub id: i64,
    pub id_actividad: i64,
    /// Start time as sent by the server (e.g. "10:00")
    pub hora_inicio: String,
    /// End time as sent by the server (e.g. "11:30")
    pub hora_fin: String,
    /// Total number of places for this slot
    pub cupo_total: u32,
    /// Places already taken
    pub cupo_ocupado: u32,
    /// Lifecycle state name, "activo" when the slot accepts inscriptions
    pub estado: String,
    pub actividad: ApiActivity,
    pub estado_horario: ApiScheduleState,
}

/// Activity summary embedded in every schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiActivity {
    pub id: i64,
    pub nombre: String,
    pub requiere_talle: bool,
    /// Minimum age, absent for activities without one
    #[serde(default)]
    pub edad: Option<u32>,
    #[serde(default)]
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiScheduleState {
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
}

/// One visitor inside an inscription request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitorPayload {
    pub nombre: String,
    pub dni: u64,
    pub edad: u32,
    /// Clothing size, empty string when the activity does not need one
    pub talle: String,
}

/// Body of `POST /inscripciones/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InscriptionRequest {
    pub id_horario: i64,
    pub visitantes: Vec<VisitorPayload>,
    pub acepta_terminos: bool,
}

/// One created inscription, the server answers with one per visitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InscriptionRecord {
    pub id: i64,
    pub id_horario: i64,
    pub id_visitante: i64,
    pub nro_personas: u32,
    #[serde(rename = "acepta_Terminos_Condiciones")]
    pub acepta_terminos_condiciones: bool,
    pub nombre_actividad: String,
}

/// Error body produced by the booking API.
///
/// Handled errors carry a plain string detail, request validation errors
/// carry a list of items with a `msg` each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: ApiErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorDetail {
    Message(String),
    Items(Vec<ApiErrorItem>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorItem {
    pub msg: String,
}

impl ApiErrorBody {
    /// First human-readable message in the body, if any
    pub fn message(&self) -> Option<&str> {
        match &self.detail {
            ApiErrorDetail::Message(message) => Some(message.as_str()),
            ApiErrorDetail::Items(items) => items.first().map(|item| item.msg.as_str()),
        }
    }
}
