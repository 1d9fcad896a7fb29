pub mod booking_mapper;
pub mod schedule_mapper;

pub use booking_mapper::BookingMapper;
pub use schedule_mapper::ScheduleMapper;
