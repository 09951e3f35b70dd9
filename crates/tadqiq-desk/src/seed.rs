//! # Seed Records
//!
//! The hardcoded demo records the desk starts with: the user directory,
//! two approved plan cycles plus the department plans under way, four
//! audit tasks, two document requests, two regulatory notifications,
//! two employee-voice reports, and one sent awareness message.
//!
//! Seed records are built by direct construction — they carry no
//! synthetic transition history, exactly like the mock records they
//! mirror. Plan task counts are seeded display values, not derived from
//! program rosters.

use tadqiq_core::{
    Department, DocRequestId, MessageId, PlanDate, PlanId, PlanYear, ProgramId, RegulatoryRef,
    ReportId, TaskId, UserId, UserRole,
};
use tadqiq_state::{
    AnnualPlan, Audience, AuditProgram, AuditTask, AwarenessMessage, DocRequestStatus,
    DocumentRequest, EmployeeVoiceReport, PlanStatus, ProgramPriority, Quarter, RegulatoryRequest,
    RegulatoryStatus, ReportStatus, TaskStatus, TaskType,
};

use crate::store::Desk;
use crate::user::User;

/// A date literal known valid at compile time.
fn date(s: &str) -> PlanDate {
    match PlanDate::parse(s) {
        Ok(d) => d,
        // Seed literals are fixed strings; a bad one is a programming
        // error surfaced by the seed tests.
        Err(_) => PlanDate::today(),
    }
}

/// Build the demo desk, acting as the general director.
pub fn seeded_desk() -> Desk {
    let mut desk = Desk::new(User::persona(UserRole::GeneralDirector));
    desk.directory = directory();
    desk.plans = plans();
    desk.programs = programs();
    desk.tasks = tasks();
    desk.doc_requests = doc_requests();
    desk.regulatory = regulatory_requests();
    desk.voice_reports = voice_reports();
    desk.awareness = awareness_messages();
    desk.regulatory_sequence = 3;
    desk
}

fn directory() -> Vec<User> {
    vec![
        User::new(
            UserId::new("USER-001"),
            "المستخدم التجريبي",
            UserRole::GeneralDirector,
            Some(Department::new("الإدارة العامة للمراجعة")),
        ),
        User::new(
            UserId::new("AUD-101"),
            "م. سارة المولد",
            UserRole::Auditor,
            Some(Department::new("الإدارة العامة للمراجعة")),
        ),
        User::new(
            UserId::new("AUD-102"),
            "أ. فهد الحربي",
            UserRole::Auditor,
            Some(Department::new("الإدارة العامة للمراجعة")),
        ),
        User::new(
            UserId::new("AUD-103"),
            "أ. ريم القحطاني",
            UserRole::Auditor,
            Some(Department::new("الإدارة العامة للمراجعة")),
        ),
        User::new(
            UserId::new("AUD-200"),
            "شهد الحربي",
            UserRole::Auditor,
            Some(Department::new("الإدارة العامة للمراجعة")),
        ),
        User::new(
            UserId::new("LIO-01"),
            "أ. منصور الصاعدي",
            UserRole::LiaisonOfficer,
            Some(Department::new("إدارة التحول الرقمي")),
        ),
        User::new(
            UserId::new("LIO-02"),
            "أ. خلود الحربي",
            UserRole::LiaisonOfficer,
            Some(Department::new("إدارة تقنية المعلومات")),
        ),
        User::new(
            UserId::new("LIO-03"),
            "أ. فيصل الرشيدي",
            UserRole::LiaisonOfficer,
            Some(Department::new("الإدارة القانونية")),
        ),
    ]
}

fn plans() -> Vec<AnnualPlan> {
    let mut seeded = Vec::new();

    let mut plan = AnnualPlan::new(
        PlanId::new("PLAN-1446"),
        PlanYear(1446),
        Department::new("الإدارة العامة للمراجعة"),
        "85%",
        date("2024-01-01"),
    )
    .with_title("خطة المراجعة السنوية 1446");
    plan.status = PlanStatus::Approved;
    plan.tasks_count = 3;
    seeded.push(plan);

    let mut plan = AnnualPlan::new(
        PlanId::new("PLAN-1445"),
        PlanYear(1445),
        Department::new("الإدارة العامة للمراجعة"),
        "90%",
        date("2023-01-01"),
    )
    .with_title("خطة المراجعة السنوية 1445");
    plan.status = PlanStatus::Approved;
    plan.tasks_count = 1;
    seeded.push(plan);

    let dept_plans = [
        ("P1", PlanStatus::Approved, 24, "إدارة التحول الرقمي", "نطاق كامل", "2024-03-01"),
        ("P2", PlanStatus::Approved, 15, "إدارة الموارد البشرية", "نطاق تشغيلي", "2024-02-15"),
        ("P5", PlanStatus::UnderReview, 32, "إدارة الرقابة الصحية", "نطاق بيئي شامل", "2024-03-05"),
        ("P7", PlanStatus::UnderReview, 14, "إدارة تقنية المعلومات", "نطاق أمن المعلومات", "2024-03-08"),
        ("P10", PlanStatus::Draft, 11, "إدارة الصيانة", "نطاق الصيانة الوقائية", "2024-03-10"),
    ];
    for (id, status, count, dept, coverage, created) in dept_plans {
        let mut plan = AnnualPlan::new(
            PlanId::new(id),
            PlanYear(1446),
            Department::new(dept),
            coverage,
            date(created),
        );
        plan.status = status;
        plan.tasks_count = count;
        seeded.push(plan);
    }

    seeded
}

fn programs() -> Vec<AuditProgram> {
    vec![
        AuditProgram {
            id: ProgramId::new("PROG-1"),
            plan_id: PlanId::new("P1"),
            title: "مراجعة المشتريات والعقود".to_string(),
            objective: "التأكد من سلامة إجراءات الترسية والتعاقد".to_string(),
            duration: "4 أسابيع".to_string(),
            priority: ProgramPriority::High,
            quarter: Quarter::Q1,
        },
        AuditProgram {
            id: ProgramId::new("PROG-2"),
            plan_id: PlanId::new("P1"),
            title: "فحص جرد المستودعات".to_string(),
            objective: "التحقق من مطابقة الجرد الفعلي للسجلات النظامية".to_string(),
            duration: "3 أسابيع".to_string(),
            priority: ProgramPriority::Medium,
            quarter: Quarter::Q2,
        },
        AuditProgram {
            id: ProgramId::new("PROG-3"),
            plan_id: PlanId::new("P1"),
            title: "تدقيق المصروفات التشغيلية".to_string(),
            objective: "تقييم كفاءة الإنفاق ومطابقته للميزانية المعتمدة".to_string(),
            duration: "6 أسابيع".to_string(),
            priority: ProgramPriority::High,
            quarter: Quarter::Q1,
        },
    ]
}

fn tasks() -> Vec<AuditTask> {
    let mut seeded = Vec::new();

    let mut task = AuditTask::new(
        TaskId::new("SH-101"),
        "مراجعة أنظمة الدفع الإلكتروني",
        "التأكد من أمان بوابات الدفع وتوافقها مع معايير البنك المركزي السعودي.",
        TaskType::Audit,
        date("2024-03-01"),
        date("2024-04-15"),
        Department::new("إدارة التحول الرقمي"),
        PlanYear(1446),
    )
    .with_assignee(UserId::new("AUD-200"))
    .with_plan(PlanId::new("PLAN-1446"));
    task.status = TaskStatus::InProgress;
    task.progress = 45;
    seeded.push(task);

    let task = AuditTask::new(
        TaskId::new("SH-102"),
        "تدقيق عقود السحابة الحكومية",
        "مراجعة بنود اتفاقيات مستوى الخدمة (SLA) مع مزود الخدمة السحابية.",
        TaskType::Audit,
        date("2024-03-10"),
        date("2024-05-20"),
        Department::new("إدارة تقنية المعلومات"),
        PlanYear(1446),
    )
    .with_assignee(UserId::new("AUD-200"))
    .with_plan(PlanId::new("PLAN-1446"));
    seeded.push(task);

    let mut task = AuditTask::new(
        TaskId::new("DT-1"),
        "أتمتة إجراءات الرقابة الميدانية",
        "تحويل كافة النماذج الورقية إلى نماذج رقمية تفاعلية مع ربطها بنظام الخرائط.",
        TaskType::Audit,
        date("2024-01-15"),
        date("2024-03-30"),
        Department::new("إدارة التحول الرقمي"),
        PlanYear(1446),
    )
    .with_assignee(UserId::new("AUD-101"))
    .with_plan(PlanId::new("PLAN-1446"));
    task.status = TaskStatus::InProgress;
    task.progress = 75;
    seeded.push(task);

    let mut task = AuditTask::new(
        TaskId::new("T1"),
        "مراجعة عقود النظافة 1446",
        "التأكد من التزام المقاول ببنود العقد وحصره للمخالفات البيئية.",
        TaskType::Audit,
        date("2024-01-01"),
        date("2024-02-15"),
        Department::new("إدارة الرقابة الصحية"),
        PlanYear(1445),
    )
    .with_assignee(UserId::new("AUD-103"))
    .with_plan(PlanId::new("PLAN-1445"));
    task.status = TaskStatus::Completed;
    task.progress = 100;
    task.final_report.uploaded = true;
    seeded.push(task);

    seeded
}

fn doc_requests() -> Vec<DocumentRequest> {
    let first = DocumentRequest::new(
        DocRequestId::new("REQ-1"),
        TaskId::new("SH-101"),
        "سجلات العمليات المالية - فبراير",
        "كافة العمليات التي تمت عبر بوابة الدفع في شهر فبراير 2024.",
        date("2024-03-15"),
    );

    let mut second = DocumentRequest::new(
        DocRequestId::new("REQ-2"),
        TaskId::new("DT-1"),
        "تقارير الحضور والانصراف الميدانية",
        "كشوفات التوقيع الميداني للمراقبين في بلدية العوالي.",
        date("2024-03-10"),
    );
    second.status = DocRequestStatus::InProgress;

    vec![first, second]
}

fn regulatory_requests() -> Vec<RegulatoryRequest> {
    let mut first = RegulatoryRequest::new(
        RegulatoryRef::new("REG-001"),
        "هيئة الرقابة ومكافحة الفساد",
        "بلاغ إداري",
        "مراجعة عقود الصيانة ببلدية العوالي",
        "يرجى تزويدنا بكافة المرفقات الفنية الخاصة بالعقد رقم 1445-092 متمثلة في محاضر الاستلام النهائي وتقارير الإنجاز الشهرية المعتمدة من الاستشاري.",
        date("2024-03-12"),
    );
    first.status = RegulatoryStatus::Processing;

    let second = RegulatoryRequest::new(
        RegulatoryRef::new("REG-002"),
        "ديوان المظالم",
        "طلب إفادة",
        "دعوى رقم 1290 لسنة 1445هـ",
        "طلب مرئيات الإدارة حول الإجراءات المتبعة في الترسية والتحقق من التزام اللجنة بالأنظمة واللوائح المعمول بها.",
        date("2024-03-10"),
    );

    vec![first, second]
}

fn voice_reports() -> Vec<EmployeeVoiceReport> {
    let mut first = EmployeeVoiceReport::new(
        ReportId::new("R1"),
        "ملاحظة حول توزيع المهام الميدانية",
        "نلاحظ عدم وجود عدالة في توزيع الجولات التفتيشية بين فرق الصباح والمساء...",
        date("2024-03-01"),
        true,
    );
    first.status = ReportStatus::Analyzing;

    let second = EmployeeVoiceReport::new(
        ReportId::new("R2"),
        "اقتراح لتحسين أتمتة التقارير",
        "نقترح إضافة خاصية التوقيع الإلكتروني مباشرة من التطبيق الميداني لتوفير الوقت...",
        date("2024-03-05"),
        false,
    );

    vec![first, second]
}

fn awareness_messages() -> Vec<AwarenessMessage> {
    let mut message = AwarenessMessage::new(
        MessageId::new("MSG-1"),
        "أهمية سرية بيانات التفتيش",
        "نود التأكيد على ضرورة الالتزام بالمعايير الأمنية عند رفع الملفات الميدانية وعدم تداولها خارج الأطر الرسمية...",
        Audience::AllStaff,
        date("2024-03-05"),
    );
    message.mark_sent();
    vec![message]
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        let desk = seeded_desk();
        assert_eq!(desk.directory().len(), 8);
        assert_eq!(desk.plans().len(), 7);
        assert_eq!(desk.programs().len(), 3);
        assert_eq!(desk.tasks().len(), 4);
        assert_eq!(desk.doc_requests().len(), 2);
        assert_eq!(desk.regulatory_requests().len(), 2);
        assert_eq!(desk.voice_reports().len(), 2);
        assert_eq!(desk.awareness_messages().len(), 1);
    }

    #[test]
    fn test_seed_dates_parse() {
        // `date()` falls back to today on a bad literal; equality with
        // the literal proves every seeded date parsed.
        let desk = seeded_desk();
        let task = desk.task(&TaskId::new("SH-101")).unwrap();
        assert_eq!(task.start_date.to_string(), "2024-03-01");
        assert_eq!(task.end_date.to_string(), "2024-04-15");
    }

    #[test]
    fn test_seed_acting_user_is_director() {
        let desk = seeded_desk();
        assert_eq!(desk.current_user().role, UserRole::GeneralDirector);
    }

    #[test]
    fn test_seeded_references_resolve() {
        let desk = seeded_desk();
        for request in desk.doc_requests() {
            assert!(desk.task(&request.task_id).is_ok());
        }
        for task in desk.tasks() {
            if let Some(plan_id) = &task.plan_id {
                assert!(desk.plan(plan_id).is_ok());
            }
        }
    }

    #[test]
    fn test_seeded_statuses() {
        let desk = seeded_desk();
        assert_eq!(
            desk.task(&TaskId::new("T1")).unwrap().status,
            TaskStatus::Completed
        );
        assert_eq!(
            desk.plan(&PlanId::new("P5")).unwrap().status,
            PlanStatus::UnderReview
        );
        assert_eq!(desk.regulatory_requests()[0].status, RegulatoryStatus::Processing);
        assert_eq!(desk.voice_reports()[0].status, ReportStatus::Analyzing);
        assert!(desk.awareness_messages()[0].sent);
    }
}
