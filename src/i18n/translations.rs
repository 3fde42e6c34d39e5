use super::Locale;

const EN: &[(&str, &str)] = &[
    ("title", "Tawjihi Calculator"),
    ("subtitle", "Calculate your first year percentage"),
    ("calculate", "Calculate"),
    ("reset", "Reset"),
    ("result", "Result"),
    ("total_score", "Total Score"),
    ("percentage", "Percentage"),
    ("name", "Name"),
    ("student", "Student"),
    ("subject", "Subject"),
    ("your_score", "Your Score"),
    ("max_marks", "Max Marks"),
    ("subject_percentage", "Percentage"),
    ("first_year_percentage", "First Year Percentage (30%)"),
    ("certificate_title", "Tawjihi Result Certificate"),
    ("certificate_footer", "Developed by Abdlarahman Alshabatat"),
    ("download_result", "Download Result"),
    ("export_in_progress", "Generating certificate..."),
    ("export_saved", "Certificate saved"),
    ("export_saved_text", "PDF unavailable, saved as text"),
    ("export_failed", "Could not generate the certificate. Please try again."),
    ("export_needs_result", "Calculate first, then download"),
    ("reset_done", "Scores reset"),
    ("language", "Language"),
    ("language_switched", "Language: English"),
    ("enter_scores", "Enter Your Scores"),
    ("help", "Help"),
    ("quit", "Quit"),
    ("help_title", "Keyboard Shortcuts"),
    ("next_field", "Next field"),
    ("previous_field", "Previous field"),
    ("edit_score", "Edit score (clamped to max)"),
    ("toggle_help", "Show/hide this help"),
    ("close_help", "Press any key to close"),
    ("terminal_too_small", "Terminal too small"),
];

const AR: &[(&str, &str)] = &[
    ("title", "حاسبة التوجيهي"),
    ("subtitle", "احسب نسبة السنة الأولى"),
    ("calculate", "احسب"),
    ("reset", "إعادة تعيين"),
    ("result", "النتيجة"),
    ("total_score", "المجموع الكلي"),
    ("percentage", "النسبة المئوية"),
    ("name", "الاسم"),
    ("student", "الطالب"),
    ("subject", "المادة"),
    ("your_score", "درجتك"),
    ("max_marks", "الدرجة العظمى"),
    ("subject_percentage", "النسبة"),
    ("first_year_percentage", "نسبة السنة الأولى (30%)"),
    ("certificate_title", "شهادة نتيجة التوجيهي"),
    ("certificate_footer", "تم التطوير بواسطة عبدالرحمن الشباطات"),
    ("download_result", "تحميل النتيجة"),
    ("export_in_progress", "جاري إنشاء الشهادة..."),
    ("export_saved", "تم حفظ الشهادة"),
    ("export_saved_text", "تعذر إنشاء PDF، تم الحفظ كنص"),
    ("export_failed", "تعذر إنشاء الشهادة. يرجى المحاولة مرة أخرى."),
    ("export_needs_result", "احسب النتيجة أولاً ثم حمّلها"),
    ("reset_done", "تمت إعادة تعيين الدرجات"),
    ("language", "اللغة"),
    ("language_switched", "اللغة: العربية"),
    ("enter_scores", "أدخل درجاتك"),
    ("help", "مساعدة"),
    ("quit", "خروج"),
    ("help_title", "اختصارات لوحة المفاتيح"),
    ("next_field", "الحقل التالي"),
    ("previous_field", "الحقل السابق"),
    ("edit_score", "تعديل الدرجة"),
    ("toggle_help", "إظهار/إخفاء المساعدة"),
    ("close_help", "اضغط أي مفتاح للإغلاق"),
    ("terminal_too_small", "نافذة الطرفية صغيرة جداً"),
];

const SUBJECTS_EN: &[(&str, &str)] = &[
    ("english", "English"),
    ("arabic", "Arabic"),
    ("islamic", "Islamic"),
    ("history", "History"),
];

const SUBJECTS_AR: &[(&str, &str)] = &[
    ("english", "اللغة الإنجليزية"),
    ("arabic", "اللغة العربية"),
    ("islamic", "التربية الإسلامية"),
    ("history", "التاريخ"),
];

fn find(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

pub(super) fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    let table = match locale {
        Locale::En => EN,
        Locale::Ar => AR,
    };
    // Subject identifiers double as dictionary keys
    find(table, key).or_else(|| subject(locale, key))
}

pub(super) fn subject(locale: Locale, id: &str) -> Option<&'static str> {
    match locale {
        Locale::En => find(SUBJECTS_EN, id),
        Locale::Ar => find(SUBJECTS_AR, id),
    }
}
