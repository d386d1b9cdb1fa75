use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::models::{
    ApiResponse,
    announcements::entities::Announcement,
    enrollments::entities::Enrollment,
    messages::entities::Message,
    notifications::{
        entities::{NotificationItem, NotificationKind, NotificationSources},
        requests::NotificationQuery,
        responses::NotificationFeedResponse,
    },
};
use crate::services::responses::{forbid_other_student, storage_failure, validation_failed};

/// 通知流最多条数
pub const FEED_LIMIT: usize = 10;
/// 每个来源取最近的条数
pub const SOURCE_LIMIT: u64 = 5;

/// 合并三个来源，按时间倒序，截断到 `cap` 条
///
/// 排序是稳定的：时间相同的条目保持 公告 -> 消息 -> 缴费审核 的来源顺序，
/// 来源内部保持存储层给出的顺序。
pub fn merge_notifications(sources: NotificationSources, cap: usize) -> Vec<NotificationItem> {
    let mut items: Vec<NotificationItem> = sources
        .announcements
        .into_iter()
        .chain(sources.messages)
        .chain(sources.payment_approvals)
        .collect();
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    items.truncate(cap);
    items
}

fn announcement_item(announcement: Announcement) -> NotificationItem {
    NotificationItem {
        id: announcement.ancmnt_id,
        message: announcement.announcement,
        created_at: announcement.created_at,
        kind: NotificationKind::Announcement,
    }
}

fn message_item(message: Message) -> NotificationItem {
    NotificationItem {
        id: message.message_id,
        message: message.message,
        created_at: message.created_at,
        kind: NotificationKind::Message,
    }
}

// 条目时间取审核时间
fn approval_item(enrollment: Enrollment) -> Option<NotificationItem> {
    let approved_at = enrollment.payment_approval?;
    Some(NotificationItem {
        id: enrollment.enrol_id,
        message: format!(
            "Your payment for school year {} was approved on {}.",
            enrollment.school_year,
            approved_at.format("%Y-%m-%d")
        ),
        created_at: approved_at,
        kind: NotificationKind::PaymentApproval,
    })
}

pub async fn get_feed(
    service: &NotificationService,
    query: NotificationQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let lrn = match query.validate() {
        Ok(lrn) => lrn,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    if let Some(resp) = forbid_other_student(request, &lrn) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    // 任一来源失败即整体失败，不返回部分结果
    let announcements = match storage.list_recent_announcements(SOURCE_LIMIT).await {
        Ok(list) => list,
        Err(e) => return Ok(storage_failure("Failed to load announcements", e)),
    };
    let messages = match storage.list_inbox(&lrn, Some(SOURCE_LIMIT)).await {
        Ok(list) => list,
        Err(e) => return Ok(storage_failure("Failed to load messages", e)),
    };
    let approvals = match storage.list_payment_approvals(&lrn, SOURCE_LIMIT).await {
        Ok(list) => list,
        Err(e) => return Ok(storage_failure("Failed to load payment approvals", e)),
    };

    let sources = NotificationSources {
        announcements: announcements.into_iter().map(announcement_item).collect(),
        messages: messages.into_iter().map(message_item).collect(),
        payment_approvals: approvals.into_iter().filter_map(approval_item).collect(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        NotificationFeedResponse {
            notifications: merge_notifications(sources, FEED_LIMIT),
        },
        "Notifications retrieved successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn item(id: i64, secs: i64, kind: NotificationKind) -> NotificationItem {
        NotificationItem {
            id,
            message: format!("item {id}"),
            created_at: at(secs),
            kind,
        }
    }

    fn ids(items: &[NotificationItem]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_merge_example_order() {
        let sources = NotificationSources {
            announcements: vec![item(1, 3, NotificationKind::Announcement)],
            messages: vec![item(2, 5, NotificationKind::Message)],
            payment_approvals: vec![item(3, 1, NotificationKind::PaymentApproval)],
        };
        let merged = merge_notifications(sources, FEED_LIMIT);
        assert_eq!(ids(&merged), vec![2, 1, 3]);
        assert_eq!(merged[0].kind, NotificationKind::Message);
    }

    #[test]
    fn test_only_announcements_pass_through() {
        let announcements: Vec<_> = (1..=5)
            .map(|i| item(i, 100 - i, NotificationKind::Announcement))
            .collect();
        let sources = NotificationSources {
            announcements: announcements.clone(),
            ..Default::default()
        };
        assert_eq!(merge_notifications(sources, FEED_LIMIT), announcements);
    }

    #[test]
    fn test_capped_and_sorted_desc() {
        let sources = NotificationSources {
            announcements: (0..5)
                .map(|i| item(i, 10 + i * 3, NotificationKind::Announcement))
                .collect(),
            messages: (5..10)
                .map(|i| item(i, 7 * i, NotificationKind::Message))
                .collect(),
            payment_approvals: (10..15)
                .map(|i| item(i, i, NotificationKind::PaymentApproval))
                .collect(),
        };
        let merged = merge_notifications(sources, FEED_LIMIT);
        assert_eq!(merged.len(), FEED_LIMIT);
        assert!(
            merged
                .windows(2)
                .all(|w| w[0].created_at >= w[1].created_at)
        );
        // 最旧的几条被截掉
        assert!(merged.iter().all(|i| i.created_at >= at(13)));
    }

    #[test]
    fn test_ties_keep_source_order() {
        let sources = NotificationSources {
            announcements: vec![item(1, 50, NotificationKind::Announcement)],
            messages: vec![item(2, 50, NotificationKind::Message)],
            payment_approvals: vec![item(3, 50, NotificationKind::PaymentApproval)],
        };
        assert_eq!(ids(&merge_notifications(sources, FEED_LIMIT)), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_sources() {
        assert!(merge_notifications(NotificationSources::default(), FEED_LIMIT).is_empty());
    }

    #[test]
    fn test_approval_item_uses_approval_time() {
        let enrollment = Enrollment {
            enrol_id: 9,
            lrn: "5".into(),
            grade_level: "7".into(),
            guardian_name: "Ana".into(),
            guardian_no: None,
            last_attended: "Elem".into(),
            public_private: "Public".into(),
            strand: None,
            school_year: "2024-2025".into(),
            date_register: None,
            regapproval_date: None,
            payment_approval: Some(at(1_720_000_000)),
            section_id: None,
            old_account: None,
            created_at: at(1),
            updated_at: at(1),
        };
        let approved = approval_item(enrollment.clone()).unwrap();
        assert_eq!(approved.created_at, at(1_720_000_000));
        assert_eq!(approved.kind, NotificationKind::PaymentApproval);
        assert!(approved.message.contains("2024-2025"));

        let pending = Enrollment {
            payment_approval: None,
            ..enrollment
        };
        assert!(approval_item(pending).is_none());
    }
}
