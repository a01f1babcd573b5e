use utoipa::OpenApi;

use crate::modules::classroom_types::model::{ClassroomType, CreateClassroomTypeDto};
use crate::modules::classrooms::model::{
    Classroom, ClassroomWithDetails, CreateClassroomDto, PaginatedClassroomsResponse,
    RoomEquipment, UpdateClassroomDto,
};
use crate::modules::contact_types::model::{ContactKind, ContactType, CreateContactTypeDto};
use crate::modules::equipment_types::model::{
    CreateEquipmentTypeDto, EquipmentType, UpdateEquipmentTypeDto,
};
use crate::modules::teachers::model::{
    AddEmailContactDto, AddPhoneContactDto, CreateTeacherDto, EmailContact,
    PaginatedTeachersResponse, PhoneContact, Teacher, TeacherWithContacts, UpdateTeacherDto,
};
use crate::utils::pagination::{PaginationMeta, PaginationParams};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::classrooms::controller::create_classroom,
        crate::modules::classrooms::controller::get_classrooms,
        crate::modules::classrooms::controller::get_classroom_by_id,
        crate::modules::classrooms::controller::update_classroom,
        crate::modules::classrooms::controller::delete_classroom,
        crate::modules::classrooms::controller::assign_equipment,
        crate::modules::classrooms::controller::remove_equipment,
        crate::modules::classroom_types::controller::create_classroom_type,
        crate::modules::classroom_types::controller::get_classroom_types,
        crate::modules::classroom_types::controller::get_classroom_type_by_id,
        crate::modules::classroom_types::controller::delete_classroom_type,
        crate::modules::equipment_types::controller::create_equipment_type,
        crate::modules::equipment_types::controller::get_equipment_types,
        crate::modules::equipment_types::controller::get_equipment_type_by_id,
        crate::modules::equipment_types::controller::update_equipment_type,
        crate::modules::equipment_types::controller::delete_equipment_type,
        crate::modules::contact_types::controller::create_contact_type,
        crate::modules::contact_types::controller::get_contact_types,
        crate::modules::contact_types::controller::get_contact_type_by_id,
        crate::modules::contact_types::controller::delete_contact_type,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::get_teacher_by_id,
        crate::modules::teachers::controller::update_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::teachers::controller::add_phone_contact,
        crate::modules::teachers::controller::remove_phone_contact,
        crate::modules::teachers::controller::add_email_contact,
        crate::modules::teachers::controller::remove_email_contact,
    ),
    components(
        schemas(
            Classroom,
            ClassroomWithDetails,
            CreateClassroomDto,
            UpdateClassroomDto,
            PaginatedClassroomsResponse,
            RoomEquipment,
            ClassroomType,
            CreateClassroomTypeDto,
            EquipmentType,
            CreateEquipmentTypeDto,
            UpdateEquipmentTypeDto,
            ContactKind,
            ContactType,
            CreateContactTypeDto,
            Teacher,
            TeacherWithContacts,
            CreateTeacherDto,
            UpdateTeacherDto,
            PaginatedTeachersResponse,
            PhoneContact,
            EmailContact,
            AddPhoneContactDto,
            AddEmailContactDto,
            PaginationMeta,
            PaginationParams,
        )
    ),
    tags(
        (name = "Classrooms", description = "Classrooms and room equipment assignment"),
        (name = "Classroom types", description = "Room classifications"),
        (name = "Equipment types", description = "Equipment catalog"),
        (name = "Contact types", description = "Contact classifications"),
        (name = "Teachers", description = "Teachers and contact details")
    ),
    info(
        title = "Campushub API",
        description = "University resource management: classrooms, equipment and teacher contacts",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
