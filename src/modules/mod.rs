pub mod classroom_types;
pub mod classrooms;
pub mod contact_types;
pub mod equipment_types;
pub mod teachers;
