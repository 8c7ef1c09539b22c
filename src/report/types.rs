// src/report/types.rs

/// One of the report tabs published by Vitibrasil, in type-code order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReportType {
    Production,
    Processing,
    Commercialization,
    Import,
    Export,
}

/// Static description of a report tab: its `opcao` code, the label written
/// into `Aba`, and the `Categoria` names indexed by sub-category (1-based).
#[derive(Debug)]
struct ReportInfo {
    code: u8,
    label: &'static str,
    categories: &'static [&'static str],
}

// Indexed by `ReportType as usize`.
static REPORTS: [ReportInfo; 5] = [
    ReportInfo {
        code: 2,
        label: "Produção",
        categories: &[],
    },
    ReportInfo {
        code: 3,
        label: "Processamento",
        categories: &[
            "Viníferas",
            "Americanas e híbridas",
            "Uvas de mesa",
            "Sem classificação",
        ],
    },
    ReportInfo {
        code: 4,
        label: "Comercialização",
        categories: &[],
    },
    ReportInfo {
        code: 5,
        label: "Importação",
        categories: &[
            "Vinhos de mesa",
            "Espumantes",
            "Uvas frescas",
            "Uvas passas",
            "Suco de uva",
        ],
    },
    ReportInfo {
        code: 6,
        label: "Exportação",
        categories: &[
            "Vinhos de mesa",
            "Espumantes",
            "Uvas frescas",
            "Suco de uva",
        ],
    },
];

impl ReportType {
    pub const ALL: [ReportType; 5] = [
        ReportType::Production,
        ReportType::Processing,
        ReportType::Commercialization,
        ReportType::Import,
        ReportType::Export,
    ];

    fn info(self) -> &'static ReportInfo {
        &REPORTS[self as usize]
    }

    /// Numeric type code used by the portal (2..=6).
    pub fn code(self) -> u8 {
        self.info().code
    }

    /// Display label written into the `Aba` field.
    pub fn label(self) -> &'static str {
        self.info().label
    }

    /// Value of the `opcao` query parameter, e.g. `opt_03`.
    pub fn opcao(self) -> String {
        format!("opt_{:02}", self.code())
    }

    pub fn has_categories(self) -> bool {
        !self.info().categories.is_empty()
    }

    /// Number of sub-categories; zero for Production and Commercialization.
    pub fn category_count(self) -> u8 {
        self.info().categories.len() as u8
    }

    /// `Categoria` label for a 1-based sub-category. Out-of-range indices
    /// (and every index for types without sub-categories) yield `None`.
    pub fn category_label(self, sub_category: u8) -> Option<&'static str> {
        let idx = usize::from(sub_category.checked_sub(1)?);
        self.info().categories.get(idx).copied()
    }
}

/// Value of the `subopcao` query parameter, e.g. `subopt_01`.
pub fn subopcao(sub_category: u8) -> String {
    format!("subopt_{:02}", sub_category)
}
