//! 基于内存 SQLite 的存储层测试

use super::SeaOrmStorage;
use crate::errors::PortalError;
use crate::models::{
    admins::requests::NewAdmin,
    announcements::requests::NewAnnouncement,
    enrollments::requests::NewEnrollment,
    grades::requests::ClassRecordQuery,
    messages::requests::{NewMessage, PartyQuery},
    notifications::requests::NotificationQuery,
    parties::entities::PartyKind,
    rosters::requests::NewRoster,
    sections::requests::NewSection,
    students::requests::NewStudent,
    subjects::requests::NewSubject,
    classes::requests::NewClass,
};
use crate::services::{MessageService, NotificationService, StudentService};
use crate::storage::{EnrollmentStamp, Storage};
use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use actix_web::{HttpRequest, HttpResponse, web};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;

async fn memory_storage() -> SeaOrmStorage {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    SeaOrmStorage::from_connection(db)
}

fn student(lrn: &str, email: &str) -> NewStudent {
    NewStudent {
        lrn: lrn.to_string(),
        fname: "Juan".to_string(),
        mname: Some("Santos".to_string()),
        lname: "Dela Cruz".to_string(),
        suffix: None,
        bdate: Some("2010-05-01".to_string()),
        bplace: None,
        gender: Some("Male".to_string()),
        religion: None,
        address: None,
        contact_no: None,
        email: email.to_string(),
        password_hash: "hash".to_string(),
    }
}

fn admin(id: &str, email: &str) -> NewAdmin {
    NewAdmin {
        admin_id: id.to_string(),
        fname: "Maria".to_string(),
        mname: None,
        lname: "Reyes".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
    }
}

fn enrollment(lrn: &str, school_year: &str, grade_level: &str) -> NewEnrollment {
    NewEnrollment {
        lrn: lrn.to_string(),
        grade_level: grade_level.to_string(),
        guardian_name: "Rosa Dela Cruz".to_string(),
        guardian_no: None,
        last_attended: "Central Elementary".to_string(),
        public_private: "Public".to_string(),
        strand: None,
        school_year: school_year.to_string(),
        date_register: chrono::Utc::now(),
    }
}

fn message(from: &str, to: &str, text: &str) -> NewMessage {
    NewMessage {
        message_sender: from.to_string(),
        message_receiver: to.to_string(),
        message: text.to_string(),
        message_date: "2025-03-01".to_string(),
    }
}

#[tokio::test]
async fn test_find_party_checks_students_then_admins() {
    let storage = memory_storage().await;
    storage
        .create_student(student("100000000001", "juan@example.com"))
        .await
        .unwrap();
    storage
        .create_admin(admin("ADM-0001", "maria@example.com"))
        .await
        .unwrap();

    let s = storage.find_party("100000000001").await.unwrap().unwrap();
    assert_eq!(s.kind, PartyKind::Student);
    assert_eq!(s.name, "Juan S. Dela Cruz");

    let a = storage.find_party("ADM-0001").await.unwrap().unwrap();
    assert_eq!(a.kind, PartyKind::Admin);

    assert!(storage.find_party("nobody").await.unwrap().is_none());

    let batch = storage
        .find_parties(&[
            "100000000001".to_string(),
            "ADM-0001".to_string(),
            "nobody".to_string(),
        ])
        .await
        .unwrap();
    assert_eq!(batch.len(), 2);
    assert_eq!(batch["ADM-0001"].kind, PartyKind::Admin);
}

#[tokio::test]
async fn test_conversation_includes_both_directions_newest_first() {
    let storage = memory_storage().await;
    let first = storage.create_message(message("A", "B", "hi")).await.unwrap();
    let second = storage.create_message(message("B", "A", "hello")).await.unwrap();
    storage.create_message(message("A", "C", "other")).await.unwrap();

    let convo = storage.list_conversation("A", "B").await.unwrap();
    let ids: Vec<i64> = convo.iter().map(|m| m.message_id).collect();
    // 同一秒写入时按编号倒序
    assert_eq!(ids, vec![second.message_id, first.message_id]);

    let inbox = storage.list_inbox("A", None).await.unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].message, "hello");
}

#[tokio::test]
async fn test_mark_read_is_idempotent() {
    let storage = memory_storage().await;
    let m = storage.create_message(message("A", "B", "hi")).await.unwrap();

    let read = storage
        .mark_message_read(m.message_id, 1_700_000_000)
        .await
        .unwrap()
        .unwrap();
    let first_read_at = read.read_at;
    assert!(first_read_at.is_some());

    let again = storage
        .mark_message_read(m.message_id, 1_800_000_000)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(again.read_at, first_read_at);

    assert!(storage.mark_message_read(9999, 1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_sign_up_rolls_back_on_failure() {
    let storage = memory_storage().await;
    storage
        .create_student(student("100000000001", "taken@example.com"))
        .await
        .unwrap();

    // 邮箱重复，学生插入失败，入学记录不应写入
    let result = storage
        .sign_up(
            student("100000000002", "taken@example.com"),
            enrollment("100000000002", "2025-2026", "Grade 7"),
        )
        .await;
    assert!(result.is_err());
    assert!(storage.get_student("100000000002").await.unwrap().is_none());
    assert!(
        storage
            .get_latest_enrollment("100000000002")
            .await
            .unwrap()
            .is_none()
    );

    let (s, e) = storage
        .sign_up(
            student("100000000003", "new@example.com"),
            enrollment("100000000003", "2025-2026", "Grade 7"),
        )
        .await
        .unwrap();
    assert_eq!(s.lrn, e.lrn);
}

#[tokio::test]
async fn test_upsert_enrollment_by_school_year() {
    let storage = memory_storage().await;
    storage
        .create_student(student("100000000001", "juan@example.com"))
        .await
        .unwrap();

    let (created, is_new) = storage
        .upsert_enrollment(enrollment("100000000001", "2025-2026", "Grade 7"))
        .await
        .unwrap();
    assert!(is_new);

    let (updated, is_new) = storage
        .upsert_enrollment(enrollment("100000000001", "2025-2026", "Grade 8"))
        .await
        .unwrap();
    assert!(!is_new);
    assert_eq!(updated.enrol_id, created.enrol_id);
    assert_eq!(updated.grade_level, "Grade 8");

    let (next_year, is_new) = storage
        .upsert_enrollment(enrollment("100000000001", "2026-2027", "Grade 8"))
        .await
        .unwrap();
    assert!(is_new);

    let latest = storage
        .get_latest_enrollment("100000000001")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(latest.enrol_id, next_year.enrol_id);
}

#[tokio::test]
async fn test_payment_approvals_only_stamped_rows() {
    let storage = memory_storage().await;
    storage
        .create_student(student("100000000001", "juan@example.com"))
        .await
        .unwrap();
    let (e, _) = storage
        .upsert_enrollment(enrollment("100000000001", "2025-2026", "Grade 7"))
        .await
        .unwrap();

    assert!(
        storage
            .list_payment_approvals("100000000001", 5)
            .await
            .unwrap()
            .is_empty()
    );

    let stamped = storage
        .stamp_enrollment(e.enrol_id, EnrollmentStamp::Payment, 1_700_000_000)
        .await
        .unwrap()
        .unwrap();
    assert!(stamped.payment_approval.is_some());
    assert!(stamped.regapproval_date.is_none());

    let approvals = storage
        .list_payment_approvals("100000000001", 5)
        .await
        .unwrap();
    assert_eq!(approvals.len(), 1);
}

#[tokio::test]
async fn test_duplicate_roster_entry_is_conflict() {
    let storage = memory_storage().await;
    storage
        .create_student(student("100000000001", "juan@example.com"))
        .await
        .unwrap();
    storage
        .create_admin(admin("ADM-0001", "maria@example.com"))
        .await
        .unwrap();
    let subject = storage
        .create_subject(NewSubject {
            subject_name: "Mathematics".to_string(),
            grade_level: "Grade 7".to_string(),
            strand: None,
        })
        .await
        .unwrap();
    let section = storage
        .create_section(NewSection {
            section_name: "Rizal".to_string(),
            grade_level: "Grade 7".to_string(),
            strand: None,
        })
        .await
        .unwrap();
    let class = storage
        .create_class(NewClass {
            admin_id: "ADM-0001".to_string(),
            subject_id: subject.subject_id,
            section_id: section.section_id,
            room: "101".to_string(),
            schedule: "MWF".to_string(),
            time: "08:00".to_string(),
        })
        .await
        .unwrap();

    let entry = NewRoster {
        lrn: "100000000001".to_string(),
        class_id: class.class_id,
    };
    storage.create_roster(entry.clone()).await.unwrap();
    let err = storage.create_roster(entry).await.unwrap_err();
    assert!(matches!(err, PortalError::Conflict(_)));

    let rosters = storage
        .list_rosters_with_pagination(ClassRecordQuery {
            page: None,
            size: None,
            lrn: Some("100000000001".to_string()),
            class_id: None,
        })
        .await
        .unwrap();
    assert_eq!(rosters.pagination.total, 1);

    let classes = storage.list_classes_with_pagination(None, None).await.unwrap();
    assert_eq!(classes.items[0].subject_name.as_deref(), Some("Mathematics"));
    assert_eq!(classes.items[0].admin_name.as_deref(), Some("Maria Reyes"));

    let schedule = storage.list_class_schedule("100000000001").await.unwrap();
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].admin_lname.as_deref(), Some("Reyes"));

    let rows = storage
        .list_student_report_rows("100000000001", &[class.class_id])
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].grade, None);
    assert_eq!(rows[0].section_name.as_deref(), Some("Rizal"));
}

// 处理函数测试：存储放入 app_data，未携带登录信息

fn request_with(storage: SeaOrmStorage) -> HttpRequest {
    let storage: Arc<dyn Storage> = Arc::new(storage);
    TestRequest::default()
        .app_data(web::Data::new(storage))
        .to_http_request()
}

async fn body_json(resp: HttpResponse) -> serde_json::Value {
    let bytes = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_feed_for_unknown_lrn_has_only_announcements() {
    let storage = memory_storage().await;
    storage
        .create_admin(admin("ADM-0001", "maria@example.com"))
        .await
        .unwrap();
    for i in 0..6 {
        storage
            .create_announcement(NewAnnouncement {
                admin_id: "ADM-0001".to_string(),
                class_id: None,
                title: format!("Notice {i}"),
                announcement: format!("School notice {i}"),
            })
            .await
            .unwrap();
    }
    let req = request_with(storage);

    let resp = NotificationService::new_lazy()
        .get_feed(
            NotificationQuery {
                lrn: Some("999".to_string()),
            },
            &req,
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    let items = json["data"]["notifications"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert!(items.iter().all(|item| item["type"] == "announcement"));
}

#[tokio::test]
async fn test_feed_requires_lrn() {
    let req = request_with(memory_storage().await);
    let service = NotificationService::new_lazy();

    for lrn in [None, Some("   ".to_string())] {
        let resp = service
            .get_feed(NotificationQuery { lrn }, &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn test_unknown_student_is_404() {
    let req = request_with(memory_storage().await);

    let resp = StudentService::new_lazy()
        .get_student("123456789012".to_string(), &req)
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["message"], "Student not found");
}

#[tokio::test]
async fn test_conversation_with_unknown_party_is_empty() {
    let storage = memory_storage().await;
    storage
        .create_admin(admin("ADM-0001", "maria@example.com"))
        .await
        .unwrap();
    storage
        .create_message(message("ADM-0001", "GHOST", "are you there?"))
        .await
        .unwrap();
    storage
        .create_message(message("GHOST", "ADM-0001", "boo"))
        .await
        .unwrap();
    let req = request_with(storage);

    let resp = MessageService::new_lazy()
        .get_conversation(
            "GHOST".to_string(),
            PartyQuery {
                uid: Some("ADM-0001".to_string()),
            },
            &req,
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["data"]["user"], serde_json::json!({"message": "User not found"}));
    assert_eq!(json["data"]["conversation"], serde_json::json!([]));
}

#[tokio::test]
async fn test_conversation_with_known_party_tags_caller() {
    let storage = memory_storage().await;
    storage
        .create_student(student("100000000001", "juan@example.com"))
        .await
        .unwrap();
    storage
        .create_admin(admin("ADM-0001", "maria@example.com"))
        .await
        .unwrap();
    storage
        .create_message(message("100000000001", "ADM-0001", "good morning"))
        .await
        .unwrap();
    storage
        .create_message(message("ADM-0001", "100000000001", "hello Juan"))
        .await
        .unwrap();
    let req = request_with(storage);

    let resp = MessageService::new_lazy()
        .get_conversation(
            "100000000001".to_string(),
            PartyQuery {
                uid: Some("ADM-0001".to_string()),
            },
            &req,
        )
        .await
        .unwrap();
    let json = body_json(resp).await;
    assert_eq!(json["data"]["user"]["type"], "student");

    let conversation = json["data"]["conversation"].as_array().unwrap();
    assert_eq!(conversation.len(), 2);
    // 新消息在前
    assert_eq!(conversation[0]["message"], "hello Juan");
    assert_eq!(conversation[0]["me"], true);
    assert_eq!(conversation[1]["me"], false);
    assert_eq!(conversation[1]["sender_name"], "Juan S. Dela Cruz");
}
