//! Static content for the sidebar panels.

pub struct QuickAction {
    pub label: &'static str,
    pub icon: &'static str,
    pub query: &'static str,
    pub gradient: &'static str,
}

pub static QUICK_ACTIONS: [QuickAction; 6] = [
    QuickAction {
        label: "AI Symptom Analysis",
        icon: "🔬",
        query: "I need comprehensive symptom analysis",
        gradient: "grad-purple-red",
    },
    QuickAction {
        label: "Medication Finder",
        icon: "💊",
        query: "Find the best medications for my condition",
        gradient: "grad-blue-pink",
    },
    QuickAction {
        label: "Doctor Referral",
        icon: "🩺",
        query: "I need to find the best specialist doctors",
        gradient: "grad-green-purple",
    },
    QuickAction {
        label: "Treatment Plans",
        icon: "📄",
        query: "Create a comprehensive treatment plan",
        gradient: "grad-orange-pink",
    },
    QuickAction {
        label: "Emergency Care",
        icon: "🚨",
        query: "This is a medical emergency",
        gradient: "grad-red-purple",
    },
    QuickAction {
        label: "Wellness Optimization",
        icon: "🎯",
        query: "Optimize my overall health and wellness",
        gradient: "grad-indigo-pink",
    },
];

pub struct Specialty {
    pub name: &'static str,
    pub icon: &'static str,
    pub patients: u32,
    pub color: &'static str,
}

pub static SPECIALTIES: [Specialty; 6] = [
    Specialty { name: "Cardiology", icon: "🫀", patients: 2847, color: "text-red" },
    Specialty { name: "Neurology", icon: "🧠", patients: 1923, color: "text-purple" },
    Specialty { name: "Orthopedics", icon: "🦴", patients: 3156, color: "text-blue" },
    Specialty { name: "Dermatology", icon: "👁️", patients: 1654, color: "text-green" },
    Specialty { name: "Gastroenterology", icon: "🌡️", patients: 2341, color: "text-yellow" },
    Specialty { name: "Genetics", icon: "🧬", patients: 987, color: "text-pink" },
];
