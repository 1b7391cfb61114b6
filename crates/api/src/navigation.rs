//! Table groupings shown in the page navigation. UI only: nothing here
//! restricts which tables the API will touch.

#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub title: &'static str,
    pub tables: &'static [&'static str],
}

pub static DOCUMENT_CATEGORIES: &[Category] = &[
    Category {
        title: "Договоры",
        tables: &[
            "договоры_оказания_услуг",
            "договоры_подряда",
            "договоры_подряда_физлиц",
            "договоры_социального_найма",
            "дополнительные_соглашения_подряд",
        ],
    },
    Category {
        title: "Акты",
        tables: &[
            "акты_выполненных_работ_допсоглаше",
            "акты_выполненных_работ_физлиц",
            "акты_дополнительных_работ",
            "акты_оказания_услуг",
            "акты_приема_передачи_материалов",
            "акты_сдачи_приемки_работ",
        ],
    },
    Category {
        title: "Другие",
        tables: &["протоколы_распределения_вознагра"],
    },
];

pub static REFERENCE_TABLES: &[&str] = &[
    "города",
    "лица",
    "материалы",
    "предметы",
    "регионы",
    "улицы",
];
