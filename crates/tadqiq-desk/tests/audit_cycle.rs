//! End-to-end walk of one audit cycle across roles, driving the seeded
//! desk the way the dashboard's views do: the department manager
//! assigns, the auditor executes and requests documents, the liaison
//! fulfils, and the general director approves.

use tadqiq_core::{Department, PlanDate, PlanYear, TaskId, UserId, UserRole};
use tadqiq_desk::{seed, DeskError, NavSection, PlanFilter};
use tadqiq_state::{DirectorAction, DocRequestStatus, PlanStatus, TaskStatus, TaskType};

#[test]
fn full_audit_cycle_across_roles() {
    let mut desk = seed::seeded_desk();

    // The data-entry clerk drafts next year's plan and its first program.
    desk.switch_role(UserRole::DataEntry);
    let plan_id = desk
        .create_plan(
            PlanYear(1447),
            Department::new("إدارة الأسواق"),
            "نطاق تشغيلي",
            Some("خطة المراجعة السنوية 1447".to_string()),
        )
        .unwrap();
    desk.add_program(
        &plan_id,
        "مراجعة تراخيص الأسواق",
        "التحقق من سريان التراخيص",
        "4 أسابيع",
        tadqiq_state::ProgramPriority::High,
        tadqiq_state::Quarter::Q1,
    )
    .unwrap();
    desk.submit_plan(&plan_id).unwrap();

    // The general director approves it.
    desk.switch_role(UserRole::GeneralDirector);
    desk.approve_plan(&plan_id).unwrap();
    assert_eq!(desk.plan(&plan_id).unwrap().status, PlanStatus::Approved);

    // The department manager creates and assigns a task under the plan.
    desk.switch_role(UserRole::DeptManager);
    let task_id = desk
        .create_task(
            "مراجعة أنظمة البوابات",
            "فحص أنظمة الدخول",
            TaskType::Inspection,
            PlanDate::parse("2024-04-01").unwrap(),
            PlanDate::parse("2024-05-15").unwrap(),
            Department::new("إدارة التحول الرقمي"),
            PlanYear(1447),
            Some(plan_id.clone()),
        )
        .unwrap();
    desk.assign_task(&task_id, UserId::new("AUD-200")).unwrap();
    {
        let task = desk.task(&task_id).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.progress, 10);
    }

    // The auditor now sees the task, names a liaison, and requests a
    // document.
    desk.switch_role(UserRole::Auditor);
    assert!(desk.visible_tasks().iter().any(|t| t.id == task_id));
    desk.assign_liaison(&task_id, UserId::new("LIO-02")).unwrap();
    let request_id = desk
        .request_document(
            &task_id,
            "سجلات الدخول - مارس",
            "كشوفات الدخول للبوابة الرئيسية.",
            PlanDate::parse("2024-04-20").unwrap(),
        )
        .unwrap();

    // The liaison prepares and fulfils it.
    desk.switch_role(UserRole::LiaisonOfficer);
    desk.begin_doc_preparation(&request_id).unwrap();
    desk.fulfil_doc_request(&request_id, Some("blob:gate-logs".to_string()))
        .unwrap();
    assert_eq!(
        desk.doc_requests()
            .iter()
            .find(|r| r.id == request_id)
            .unwrap()
            .status,
        DocRequestStatus::Received
    );

    // The auditor completes the work and uploads the final report.
    desk.switch_role(UserRole::Auditor);
    desk.complete_task(&task_id).unwrap();
    desk.upload_final_report(&task_id).unwrap();

    // The general director approves the report; it locks.
    desk.switch_role(UserRole::GeneralDirector);
    desk.approve_final_report(&task_id).unwrap();
    assert!(matches!(
        desk.approve_final_report(&task_id),
        Err(DeskError::Task(_))
    ));
}

#[test]
fn regulatory_notification_handled_to_closure() {
    let mut desk = seed::seeded_desk();

    // The liaison logs an inbound notification.
    desk.switch_role(UserRole::LiaisonOfficer);
    let reference = desk
        .log_regulatory_request(
            "هيئة الرقابة ومكافحة الفساد",
            "طلب إفادة",
            "التحقق من إجراءات الترسية",
            "يرجى موافاتنا بمستندات الترسية.",
        )
        .unwrap();

    // The director asks the department for information, then responds
    // and closes the file.
    desk.switch_role(UserRole::GeneralDirector);
    desk.act_on_regulatory(
        &reference,
        DirectorAction::RequestInfo {
            department: Department::new("إدارة الأسواق"),
            inquiry: "بيان إجراءات الترسية".to_string(),
        },
    )
    .unwrap();
    desk.act_on_regulatory(
        &reference,
        DirectorAction::PrepareResponse {
            response: "الرد الرسمي المعتمد".to_string(),
        },
    )
    .unwrap();
    desk.close_regulatory(&reference).unwrap();

    let request = desk
        .regulatory_requests()
        .iter()
        .find(|r| r.reference == reference)
        .unwrap();
    assert!(request.status.is_terminal());
    assert_eq!(request.actions.len(), 2);
}

#[test]
fn role_visibility_matches_navigation() {
    let mut desk = seed::seeded_desk();

    // A liaison's sidebar has no task oversight; the query surface
    // still answers, but navigation refuses.
    desk.switch_role(UserRole::LiaisonOfficer);
    assert!(desk.open_section(NavSection::TasksOversight).is_err());
    assert!(desk.open_section(NavSection::DocRequests).is_ok());

    // A department manager's plan list is approved-own-department only,
    // even with an explicit contradictory filter.
    desk.switch_role(UserRole::DeptManager);
    let plans = desk.visible_plans(&PlanFilter {
        status: Some(PlanStatus::Draft),
        department: Some(Department::new("إدارة الصيانة")),
    });
    assert!(plans
        .iter()
        .all(|p| p.status == PlanStatus::Approved
            && p.department == Department::new("إدارة التحول الرقمي")));

    // The auditor persona sees exactly the seeded AUD-200 tasks.
    desk.switch_role(UserRole::Auditor);
    let mine: Vec<_> = desk.visible_tasks().iter().map(|t| t.id.clone()).collect();
    assert_eq!(mine, vec![TaskId::new("SH-101"), TaskId::new("SH-102")]);
}
