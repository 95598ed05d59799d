//! Filepath: src/core/icons.rs
//! Static lucide-react identifier → `ICONS.*` constant table.
//!
//! Lookup is exact-string and case-sensitive. The table is closed: names
//! missing here are reported by the caller and their call sites are left
//! untouched.

use std::collections::HashMap;
use std::sync::LazyLock;

/// (lucide-react export, constant reference in `@/lib/config/icons`)
pub const ICON_MAP: &[(&str, &str)] = &[
    // UI actions
    ("HelpCircle", "ICONS.HELP"),
    ("X", "ICONS.CLOSE"),
    ("Check", "ICONS.CHECK"),
    ("Plus", "ICONS.PLUS"),
    ("Edit2", "ICONS.EDIT"),
    ("Save", "ICONS.SAVE"),
    ("Trash2", "ICONS.DELETE"),
    ("Search", "ICONS.SEARCH"),
    ("Menu", "ICONS.MENU"),
    ("ExternalLink", "ICONS.EXTERNAL_LINK"),
    ("Link2", "ICONS.LINK"),
    // Status & feedback
    ("Loader2", "ICONS.LOADING"),
    ("CheckCircle2", "ICONS.SUCCESS"),
    ("CheckCircle", "ICONS.SUCCESS_ALT"),
    ("XCircle", "ICONS.ERROR"),
    ("AlertCircle", "ICONS.WARNING"),
    ("AlertTriangle", "ICONS.ALERT"),
    ("Shield", "ICONS.SHIELD"),
    // Navigation
    ("ChevronDown", "ICONS.CHEVRON_DOWN"),
    ("ChevronUp", "ICONS.CHEVRON_UP"),
    ("ChevronLeft", "ICONS.CHEVRON_LEFT"),
    ("ChevronRight", "ICONS.CHEVRON_RIGHT"),
    ("ArrowLeft", "ICONS.ARROW_LEFT"),
    ("ArrowRight", "ICONS.ARROW_RIGHT"),
    ("ArrowUp", "ICONS.ARROW_UP"),
    ("ArrowDown", "ICONS.ARROW_DOWN"),
    ("ArrowUpDown", "ICONS.ARROW_UP_DOWN"),
    ("Home", "ICONS.HOME"),
    // Documents & files
    ("FileText", "ICONS.FILE_TEXT"),
    ("FileIcon", "ICONS.FILE_ICON"),
    ("BookOpen", "ICONS.BOOK_OPEN"),
    ("Upload", "ICONS.UPLOAD"),
    // Work & production
    ("Wrench", "ICONS.WRENCH"),
    ("Package", "ICONS.PACKAGE"),
    ("Calendar", "ICONS.CALENDAR"),
    ("Clock", "ICONS.CLOCK"),
    ("MapPin", "ICONS.MAP_PIN"),
    // Analytics & charts
    ("TrendingUp", "ICONS.TRENDING_UP"),
    ("TrendingDown", "ICONS.TRENDING_DOWN"),
    ("BarChart3", "ICONS.BAR_CHART"),
    ("PieChart", "ICONS.PIE_CHART"),
    ("Minus", "ICONS.MINUS"),
    // Users & communication
    ("User", "ICONS.USER"),
    ("Users", "ICONS.USERS"),
    ("MessageSquare", "ICONS.MESSAGE"),
    ("Sparkles", "ICONS.SPARKLES"),
    // Media controls
    ("Volume2", "ICONS.VOLUME_ON"),
    ("VolumeX", "ICONS.VOLUME_OFF"),
    ("Play", "ICONS.PLAY"),
    ("Pause", "ICONS.PAUSE"),
    ("Square", "ICONS.STOP"),
    ("Mic", "ICONS.MIC_ON"),
    ("MicOff", "ICONS.MIC_OFF"),
    // Layout
    ("LayoutDashboard", "ICONS.DASHBOARD"),
    // shadcn/ui primitives
    ("CheckIcon", "ICONS.CHECK_ICON"),
    ("ChevronDownIcon", "ICONS.CHEVRON_DOWN_ICON"),
    ("ChevronUpIcon", "ICONS.CHEVRON_UP_ICON"),
    ("CircleIcon", "ICONS.CIRCLE_ICON"),
];

static INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ICON_MAP.iter().copied().collect());

/// Resolve a lucide-react export name to its `ICONS.*` constant.
pub fn lookup(name: &str) -> Option<&'static str> {
    INDEX.get(name).copied()
}
