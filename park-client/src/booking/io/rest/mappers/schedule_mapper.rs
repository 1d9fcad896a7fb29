//! park-client/src/booking/io/rest/mappers/schedule_mapper.rs

use shared::ApiSchedule;

use crate::booking::domain::models::activity::ActivityConstraints;
use crate::booking::domain::models::schedule::ScheduleSlot;

/// Mapper from the schedule wire DTO to the domain slot.
pub struct ScheduleMapper;

impl ScheduleMapper {
    pub fn to_domain(dto: ApiSchedule) -> ScheduleSlot {
        ScheduleSlot {
            id: dto.id,
            activity_id: dto.id_actividad,
            activity_name: dto.actividad.nombre,
            starts_at: dto.hora_inicio,
            ends_at: dto.hora_fin,
            total_capacity: dto.cupo_total,
            occupied_count: dto.cupo_ocupado,
            server_state: dto.estado,
            server_constraints: ActivityConstraints::new(dto.actividad.edad, dto.actividad.requiere_talle),
        }
    }

    pub fn to_domain_list(dtos: Vec<ApiSchedule>) -> Vec<ScheduleSlot> {
        dtos.into_iter().map(Self::to_domain).collect()
    }
}
