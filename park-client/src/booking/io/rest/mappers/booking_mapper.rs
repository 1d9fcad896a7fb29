//! park-client/src/booking/io/rest/mappers/booking_mapper.rs

use shared::{InscriptionRecord, InscriptionRequest, VisitorPayload};

use crate::booking::domain::commands::booking::{BookingReceipt, BookingRequest, Visitor};

/// Mapper between booking commands and the inscription wire DTOs.
pub struct BookingMapper;

impl BookingMapper {
    pub fn to_dto(request: &BookingRequest) -> InscriptionRequest {
        InscriptionRequest {
            id_horario: request.schedule_id,
            visitantes: request.visitors.iter().map(Self::visitor_to_dto).collect(),
            acepta_terminos: request.terms_accepted,
        }
    }

    /// The server sends no size as an empty string
    fn visitor_to_dto(visitor: &Visitor) -> VisitorPayload {
        VisitorPayload {
            nombre: visitor.name.clone(),
            dni: visitor.national_id,
            edad: visitor.age,
            talle: visitor.clothing_size.clone().unwrap_or_default(),
        }
    }

    pub fn to_receipt(records: Vec<InscriptionRecord>) -> BookingReceipt {
        BookingReceipt {
            activity_name: records.first().map(|record| record.nombre_actividad.clone()),
            inscription_ids: records.into_iter().map(|record| record.id).collect(),
        }
    }
}
