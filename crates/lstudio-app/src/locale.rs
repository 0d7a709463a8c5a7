//! User-facing text per language
//!
//! Log lines stay in English; everything the user reads on screen comes from
//! here.

use lstudio_core::{Language, RequestKind};

/// All user-facing strings for one language
#[derive(Debug)]
pub struct Texts {
    pub app_title: &'static str,
    pub title_label: &'static str,
    pub title_placeholder: &'static str,
    pub strategies_label: &'static str,

    pub welcome_heading: &'static str,
    pub welcome_body: &'static str,

    pub plan_heading: &'static str,
    pub explanation_heading: &'static str,

    pub explain_strategy_action: &'static str,
    pub explain_lesson_action: &'static str,
    pub export_action: &'static str,
    pub back_action: &'static str,
    pub quit_action: &'static str,

    pub plan_error: &'static str,
    pub strategy_error: &'static str,
    pub lesson_error: &'static str,

    pub export_unavailable: &'static str,
    pub export_failed: &'static str,
    pub exported_to: &'static str,

    /// Cycled under the loading indicator
    pub loading_messages: &'static [&'static str],
}

impl Texts {
    /// The single message shown when a request of `kind` fails
    pub fn generation_error(&self, kind: RequestKind) -> &'static str {
        match kind {
            RequestKind::Plan => self.plan_error,
            RequestKind::StrategyExplanation => self.strategy_error,
            RequestKind::LessonExplanation => self.lesson_error,
        }
    }
}

static ENGLISH: Texts = Texts {
    app_title: "Lesson Studio",
    title_label: "Lesson title",
    title_placeholder: "e.g. Plant life cycle",
    strategies_label: "Teaching strategies",

    welcome_heading: "Ready to create?",
    welcome_body: "Type a lesson title, then pick one of the teaching strategies to generate a complete, interactive lesson plan.",

    plan_heading: "Lesson plan",
    explanation_heading: "Explanation",

    explain_strategy_action: "Explain strategy",
    explain_lesson_action: "Interactive explanation",
    export_action: "Export",
    back_action: "Back to plan",
    quit_action: "Quit",

    plan_error: "An error occurred while generating the plan. Please try again.",
    strategy_error: "An error occurred while explaining the strategy.",
    lesson_error: "An error occurred while creating the interactive explanation.",

    export_unavailable: "Export is only available for the lesson plan.",
    export_failed: "An error occurred while exporting the lesson plan.",
    exported_to: "Lesson plan exported to",

    loading_messages: &[
        "Sharpening the pencils...",
        "Arranging the desks...",
        "Writing learning objectives...",
        "Planning the warm-up activity...",
        "Designing group work...",
        "Preparing assessment questions...",
        "Choosing the right examples...",
        "Wiping the whiteboard...",
        "Timing each activity...",
        "Thinking like a student...",
    ],
};

static ARABIC: Texts = Texts {
    app_title: "استوديو الدروس",
    title_label: "عنوان الدرس",
    title_placeholder: "مثال: دورة حياة النبات",
    strategies_label: "استراتيجيات التدريس",

    welcome_heading: "مستعد للإبداع؟",
    welcome_body: "ابدأ بكتابة عنوان لدرسك في الأعلى، ثم اختر إحدى استراتيجيات التدريس المبتكرة لتوليد خطة درس متكاملة وتفاعلية.",

    plan_heading: "خطة الدرس",
    explanation_heading: "شرح",

    explain_strategy_action: "شرح الاستراتيجية",
    explain_lesson_action: "شرح تفاعلي",
    export_action: "تصدير",
    back_action: "العودة للخطة",
    quit_action: "خروج",

    plan_error: "حدث خطأ أثناء إنشاء الخطة. يرجى المحاولة مرة أخرى.",
    strategy_error: "حدث خطأ أثناء شرح الاستراتيجية.",
    lesson_error: "حدث خطأ أثناء إنشاء الشرح التفاعلي.",

    export_unavailable: "التصدير متاح لخطة الدرس فقط.",
    export_failed: "حدث خطأ أثناء تصدير خطة الدرس.",
    exported_to: "تم تصدير خطة الدرس إلى",

    loading_messages: &[
        "جارٍ بري الأقلام...",
        "جارٍ ترتيب المقاعد...",
        "جارٍ صياغة أهداف الدرس...",
        "جارٍ تخطيط النشاط التمهيدي...",
        "جارٍ تصميم العمل الجماعي...",
        "جارٍ إعداد أسئلة التقويم...",
        "جارٍ اختيار الأمثلة المناسبة...",
        "جارٍ مسح السبورة...",
    ],
};

/// Texts for `language`
pub fn texts(language: Language) -> &'static Texts {
    match language {
        Language::English => &ENGLISH,
        Language::Arabic => &ARABIC,
    }
}
