//! Static catalog of teaching strategies
//!
//! The catalog is fixed at compile time, ordered, and never mutated. Each
//! entry carries its display text in every supported [`Language`].

use crate::types::Language;

/// Text available in every supported language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: &'static str,
    pub ar: &'static str,
}

impl LocalizedText {
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.en,
            Language::Arabic => self.ar,
        }
    }
}

/// Icon shown next to a strategy in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogIcon {
    BookOpen,
    Hats,
    Brainstorm,
    Map,
    CheckCircle,
    Briefcase,
    Puzzle,
    Search,
    Mask,
    Drama,
    GameController,
    Heart,
    Cog,
}

/// A named pedagogical technique used to steer generated content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    /// Unique, stable key (used on the command line and in logs)
    pub id: &'static str,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub icon: CatalogIcon,
}

impl Strategy {
    pub fn name(&self, language: Language) -> &'static str {
        self.name.get(language)
    }

    pub fn description(&self, language: Language) -> &'static str {
        self.description.get(language)
    }
}

/// The fixed, ordered strategy catalog
pub const TEACHING_STRATEGIES: &[Strategy] = &[
    Strategy {
        id: "reciprocal-teaching",
        name: LocalizedText {
            en: "Reciprocal Teaching",
            ar: "التدريس التبادلي",
        },
        description: LocalizedText {
            en: "A dialogue between teacher and students about a text, taking turns to lead.",
            ar: "حوار بين المعلم والطلاب حول نص معين، يتبادلون فيه الأدوار.",
        },
        icon: CatalogIcon::BookOpen,
    },
    Strategy {
        id: "six-hats",
        name: LocalizedText {
            en: "Six Thinking Hats",
            ar: "القبعات الست",
        },
        description: LocalizedText {
            en: "A group thinking tool for looking at a problem from six different angles.",
            ar: "أداة للتفكير الجماعي وحل المشكلات من زوايا مختلفة.",
        },
        icon: CatalogIcon::Hats,
    },
    Strategy {
        id: "brainstorming",
        name: LocalizedText {
            en: "Brainstorming",
            ar: "العصف الذهني",
        },
        description: LocalizedText {
            en: "Generate as many ideas as possible about a topic without restrictions.",
            ar: "توليد أكبر عدد ممكن من الأفكار حول موضوع معين دون قيود.",
        },
        icon: CatalogIcon::Brainstorm,
    },
    Strategy {
        id: "thinking-maps",
        name: LocalizedText {
            en: "Thinking Maps",
            ar: "خرائط التفكير",
        },
        description: LocalizedText {
            en: "Visual tools for organising ideas and presenting them clearly.",
            ar: "أدوات بصرية لتنظيم الأفكار وعرضها بطريقة منظمة.",
        },
        icon: CatalogIcon::Map,
    },
    Strategy {
        id: "formative-assessment",
        name: LocalizedText {
            en: "Formative Assessment",
            ar: "التقويم التكويني",
        },
        description: LocalizedText {
            en: "Continuous checks on student learning with timely feedback.",
            ar: "تقييم مستمر لمراقبة تعلم الطلاب وتقديم تغذية راجعة.",
        },
        icon: CatalogIcon::CheckCircle,
    },
    Strategy {
        id: "project-based",
        name: LocalizedText {
            en: "Project-Based Learning",
            ar: "التعلم القائم على المشاريع",
        },
        description: LocalizedText {
            en: "Students gain knowledge and skills by working on a project.",
            ar: "يكتسب الطلاب المعرفة والمهارات من خلال العمل في مشروع.",
        },
        icon: CatalogIcon::Briefcase,
    },
    Strategy {
        id: "problem-solving",
        name: LocalizedText {
            en: "Problem Solving",
            ar: "حل المشكلات",
        },
        description: LocalizedText {
            en: "Focuses on finding solutions to complex, open problems.",
            ar: "استراتيجية تركز على إيجاد حلول للمشكلات المعقدة.",
        },
        icon: CatalogIcon::Puzzle,
    },
    Strategy {
        id: "inquiry-based",
        name: LocalizedText {
            en: "Inquiry-Based Learning",
            ar: "التعلم القائم على الاستقصاء",
        },
        description: LocalizedText {
            en: "Learning that starts from questions and problems rather than facts.",
            ar: "عملية تعلم تبدأ بطرح الأسئلة والمشكلات بدلاً من الحقائق.",
        },
        icon: CatalogIcon::Search,
    },
    Strategy {
        id: "mantle-of-expert",
        name: LocalizedText {
            en: "Mantle of the Expert",
            ar: "عباءة الخبير",
        },
        description: LocalizedText {
            en: "Students take on the role of experts to solve a real-world problem.",
            ar: "يتقمص الطلاب دور خبراء لحل مشكلة واقعية.",
        },
        icon: CatalogIcon::Mask,
    },
    Strategy {
        id: "process-drama",
        name: LocalizedText {
            en: "Process Drama",
            ar: "الدراما التكوينية",
        },
        description: LocalizedText {
            en: "Using drama to explore issues, ideas and feelings.",
            ar: "استخدام الدراما لاستكشاف القضايا والأفكار والمشاعر.",
        },
        icon: CatalogIcon::Drama,
    },
    Strategy {
        id: "fun-learning",
        name: LocalizedText {
            en: "Fun Learning",
            ar: "التعلم الممتع",
        },
        description: LocalizedText {
            en: "Bringing games and playful activities into the learning process.",
            ar: "دمج الألعاب والأنشطة الممتعة في عملية التعلم.",
        },
        icon: CatalogIcon::GameController,
    },
    Strategy {
        id: "social-emotional",
        name: LocalizedText {
            en: "Social-Emotional Learning",
            ar: "التعلم العاطفي والاجتماعي",
        },
        description: LocalizedText {
            en: "Developing students' social and emotional skills.",
            ar: "تنمية المهارات الاجتماعية والعاطفية لدى الطلاب.",
        },
        icon: CatalogIcon::Heart,
    },
    Strategy {
        id: "adaptive-learning",
        name: LocalizedText {
            en: "Adaptive Learning",
            ar: "التعلم التكيفي",
        },
        description: LocalizedText {
            en: "Tailoring the learning path to each student's needs.",
            ar: "تخصيص مسار التعلم لكل طالب بناءً على احتياجاته.",
        },
        icon: CatalogIcon::Cog,
    },
];

/// Look up a strategy by its id
pub fn find_strategy(id: &str) -> Option<&'static Strategy> {
    let id = id.trim();
    TEACHING_STRATEGIES.iter().find(|s| s.id == id)
}

/// Position of a strategy in the catalog
pub fn strategy_index(id: &str) -> Option<usize> {
    let id = id.trim();
    TEACHING_STRATEGIES.iter().position(|s| s.id == id)
}
