//! Field catalog for the membership registration form.
//!
//! Every input the page renders is a `FieldId`. DOM ids follow the
//! `id_<name>` convention of the server-side form so posted names line up
//! with what the receiving server expects.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

use serde::{Deserialize, Serialize};

/// Every validated input on the registration form, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    NameAr,
    NameEn,
    Gender,
    PlaceOfBirth,
    DateOfBirth,
    CallNumber,
    WhatsappNumber,
    Email,
    JobTitle,
    PeriodOfResidence,
    Photograph,
    PassportPhoto,
    ResidencyPhoto,
    FamilyName,
    MemberCount,
    StreetAddress,
    District,
    City,
    Province,
    PostalCode,
    AcademicQualification,
    School,
    Major,
    Semester,
}

/// How the field is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Tel,
    Email,
    Date,
    Number,
    File,
    Select,
}

impl InputKind {
    /// Value for the `type` attribute. Selects have none.
    pub fn html_type(self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Tel => Some("tel"),
            Self::Email => Some("email"),
            Self::Date => Some("date"),
            Self::Number => Some("number"),
            Self::File => Some("file"),
            Self::Select => None,
        }
    }
}

/// Form sections, rendered as separate fieldsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Person,
    Family,
    Address,
    Academic,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::Person, Self::Family, Self::Address, Self::Academic];

    pub fn title(self) -> &'static str {
        match self {
            Self::Person => "البيانات الشخصية",
            Self::Family => "بيانات الأسرة",
            Self::Address => "العنوان",
            Self::Academic => "المؤهل العلمي",
        }
    }
}

impl FieldId {
    pub const ALL: [Self; 24] = [
        Self::NameAr,
        Self::NameEn,
        Self::Gender,
        Self::PlaceOfBirth,
        Self::DateOfBirth,
        Self::CallNumber,
        Self::WhatsappNumber,
        Self::Email,
        Self::JobTitle,
        Self::PeriodOfResidence,
        Self::Photograph,
        Self::PassportPhoto,
        Self::ResidencyPhoto,
        Self::FamilyName,
        Self::MemberCount,
        Self::StreetAddress,
        Self::District,
        Self::City,
        Self::Province,
        Self::PostalCode,
        Self::AcademicQualification,
        Self::School,
        Self::Major,
        Self::Semester,
    ];

    /// Posted form name.
    pub fn name(self) -> &'static str {
        match self {
            Self::NameAr => "name_ar",
            Self::NameEn => "name_en",
            Self::Gender => "gender",
            Self::PlaceOfBirth => "place_of_birth",
            Self::DateOfBirth => "date_of_birth",
            Self::CallNumber => "call_number",
            Self::WhatsappNumber => "whatsapp_number",
            Self::Email => "email",
            Self::JobTitle => "job_title",
            Self::PeriodOfResidence => "period_of_residence",
            Self::Photograph => "photograph",
            Self::PassportPhoto => "passport_photo",
            Self::ResidencyPhoto => "residency_photo",
            Self::FamilyName => "family_name",
            Self::MemberCount => "member_count",
            Self::StreetAddress => "street_address",
            Self::District => "district",
            Self::City => "city",
            Self::Province => "province",
            Self::PostalCode => "postal_code",
            Self::AcademicQualification => "academic_qualification",
            Self::School => "school",
            Self::Major => "major",
            Self::Semester => "semester",
        }
    }

    /// DOM id (`id_<name>`).
    pub fn dom_id(self) -> String {
        format!("id_{}", self.name())
    }

    pub fn kind(self) -> InputKind {
        match self {
            Self::Gender | Self::JobTitle | Self::PeriodOfResidence | Self::City | Self::AcademicQualification => {
                InputKind::Select
            }
            Self::DateOfBirth => InputKind::Date,
            Self::CallNumber | Self::WhatsappNumber => InputKind::Tel,
            Self::Email => InputKind::Email,
            Self::Photograph | Self::PassportPhoto | Self::ResidencyPhoto => InputKind::File,
            Self::MemberCount | Self::Semester => InputKind::Number,
            _ => InputKind::Text,
        }
    }

    pub fn section(self) -> Section {
        match self {
            Self::FamilyName | Self::MemberCount => Section::Family,
            Self::StreetAddress | Self::District | Self::City | Self::Province | Self::PostalCode => Section::Address,
            Self::AcademicQualification | Self::School | Self::Major | Self::Semester => Section::Academic,
            _ => Section::Person,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NameAr => "الاسم كاملاً بالعربي مطابقاً للجواز",
            Self::NameEn => "الاسم كاملاً بالإنجليزي مطابقاً للجواز",
            Self::Gender => "الجنس",
            Self::PlaceOfBirth => "مكان الميلاد مطابقاً للجواز",
            Self::DateOfBirth => "تاريخ الميلاد مطابقاً للجواز",
            Self::CallNumber => "رقم الهاتف (اتصال)",
            Self::WhatsappNumber => "رقم الواتساب",
            Self::Email => "البريد الإلكتروني",
            Self::JobTitle => "المسمى الوظيفي",
            Self::PeriodOfResidence => "فترة الإقامة في إندونيسيا",
            Self::Photograph => "صورة شخصية",
            Self::PassportPhoto => "صورة جواز السفر",
            Self::ResidencyPhoto => "صورة الإقامة أو مايثبت تواجدك في جمهورية إندونيسيا",
            Self::FamilyName => "الأسم العائلي",
            Self::MemberCount => "عدد أفراد الأسرة التي تعيلها في إندونيسيا",
            Self::StreetAddress => "عنوان الشارع",
            Self::District => "المنطقة",
            Self::City => "المدينة",
            Self::Province => "الولاية",
            Self::PostalCode => "الرمز البريدي (إختياري)",
            Self::AcademicQualification => "المؤهل العلمي",
            Self::School => "أسم الجامعة / معهد / مدرسة (إختياري)",
            Self::Major => "التخصص الدراسي (إختياري)",
            Self::Semester => "الفصل الدراسي (إختياري)",
        }
    }

    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::NameAr => Some("الاسم بالعربي"),
            Self::NameEn => Some("الاسم بالإنجليزي"),
            Self::PlaceOfBirth => Some("صنعاء، حضرموت ..."),
            Self::CallNumber | Self::WhatsappNumber => Some("ex. 08123456789"),
            Self::Email => Some("ex. yemeni@indonesia.com"),
            Self::FamilyName => Some("آل .."),
            Self::MemberCount => Some("0"),
            Self::StreetAddress => Some("ex. Jl. ABC No.5"),
            Self::District => Some("ex. ABC"),
            Self::Province => Some("ex. Jawa Barat"),
            Self::PostalCode => Some("ex. 012345"),
            Self::School => Some("ex. Yemeni University"),
            Self::Major => Some("ex. IT"),
            Self::Semester => Some("4"),
            _ => None,
        }
    }

    /// Fixed `(value, label)` choices for select fields. `City` comes from
    /// configuration and returns an empty slice here.
    pub fn choices(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Gender => &[("0", "ذكر"), ("1", "أنثى")],
            Self::JobTitle => &[
                ("0", "طالب"),
                ("1", "موظف"),
                ("2", "مستثمر أو رجل أعمال"),
                ("3", "غير ذلك"),
                ("4", "لا يوجد"),
            ],
            Self::PeriodOfResidence => &[
                ("0", "أقل من 6 شهور"),
                ("1", "سنة أو أقل"),
                ("2", "سنة إلى سنتين"),
                ("3", "سنتين إلى 3 سنوات"),
                ("4", "3 سنوات إلى 4 سنوات"),
                ("5", "4 سنوات إلى 5 سنوات"),
                ("6", "أكثر من 5 سنوات"),
            ],
            Self::AcademicQualification => &[
                ("0", "دكتوراه"),
                ("1", "ماجستير"),
                ("2", "بكالوريوس"),
                ("3", "دبلوم"),
                ("4", "ثانوي"),
                ("5", "أساسي"),
                ("6", "لايوجد"),
            ],
            _ => &[],
        }
    }

    /// Fields that are visited in the given section, in page order.
    pub fn in_section(section: Section) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |field| field.section() == section)
    }
}
