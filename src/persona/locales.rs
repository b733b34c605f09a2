//! Per-country name and phone tables.
//!
//! Phone patterns use `#` for any digit and `%` for a non-zero digit.

/// How given and family names are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOrder {
    /// "John Smith"
    GivenFirst,
    /// "王伟" - family name first, no separator
    FamilyFirstJoined,
}

#[derive(Debug)]
pub struct Locale {
    pub countries: &'static [&'static str],
    pub given_names: &'static [&'static str],
    pub family_names: &'static [&'static str],
    pub order: NameOrder,
    pub phone_patterns: &'static [&'static str],
}

pub static EN_US: Locale = Locale {
    countries: &["US"],
    given_names: &[
        "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
        "David", "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
    ],
    family_names: &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
        "Rodriguez", "Martinez", "Wilson", "Anderson", "Taylor", "Thomas", "Moore", "Jackson",
    ],
    order: NameOrder::GivenFirst,
    phone_patterns: &["+1 (%##) %##-####", "(%##) %##-####", "%##-%##-####"],
};

pub static EN_GB: Locale = Locale {
    countries: &["GB", "IE"],
    given_names: &[
        "Oliver", "Amelia", "George", "Isla", "Harry", "Ava", "Jack", "Emily", "Charlie",
        "Sophie", "Thomas", "Grace", "James", "Lily",
    ],
    family_names: &[
        "Smith", "Jones", "Taylor", "Brown", "Williams", "Wilson", "Johnson", "Davies",
        "Robinson", "Wright", "Thompson", "Evans", "Walker", "Hughes",
    ],
    order: NameOrder::GivenFirst,
    phone_patterns: &["+44 7### ######", "+44 20 #### ####", "0161 ### ####"],
};

pub static EN_CA: Locale = Locale {
    countries: &["CA"],
    given_names: &[
        "Liam", "Olivia", "Noah", "Emma", "Ethan", "Charlotte", "Lucas", "Chloé", "Benjamin",
        "Maya", "Félix", "Léa",
    ],
    family_names: &[
        "Smith", "Tremblay", "Martin", "Roy", "Wilson", "Gagnon", "MacDonald", "Brown",
        "Côté", "Taylor", "Campbell", "Bouchard",
    ],
    order: NameOrder::GivenFirst,
    phone_patterns: &["+1 (%##) %##-####", "%##-%##-####"],
};

pub static EN_AU: Locale = Locale {
    countries: &["AU", "NZ"],
    given_names: &[
        "Jack", "Charlotte", "William", "Olivia", "Oliver", "Mia", "Noah", "Ava", "Thomas",
        "Amelia", "Lachlan", "Chloe",
    ],
    family_names: &[
        "Smith", "Jones", "Williams", "Brown", "Wilson", "Taylor", "Nguyen", "Johnson",
        "Martin", "White", "Anderson", "Walker",
    ],
    order: NameOrder::GivenFirst,
    phone_patterns: &["+61 4## ### ###", "(02) #### ####", "04## ### ###"],
};

pub static EN_IN: Locale = Locale {
    countries: &["IN"],
    given_names: &[
        "Aarav", "Ananya", "Vivaan", "Diya", "Aditya", "Saanvi", "Arjun", "Priya", "Rohan",
        "Kavya", "Ishaan", "Meera",
    ],
    family_names: &[
        "Sharma", "Verma", "Patel", "Gupta", "Singh", "Kumar", "Reddy", "Iyer", "Nair",
        "Das", "Mehta", "Joshi",
    ],
    order: NameOrder::GivenFirst,
    phone_patterns: &["+91 9#### #####", "+91 8#### #####", "07### ######"],
};

pub static ZH_CN: Locale = Locale {
    countries: &["CN", "SG"],
    given_names: &[
        "伟", "芳", "娜", "秀英", "敏", "静", "丽", "强", "磊", "军", "洋", "勇", "艳", "杰",
        "娟", "涛", "明", "超", "秀兰", "霞",
    ],
    family_names: &[
        "王", "李", "张", "刘", "陈", "杨", "黄", "赵", "吴", "周", "徐", "孙", "马", "朱",
    ],
    order: NameOrder::FamilyFirstJoined,
    phone_patterns: &["+86 13# #### ####", "+86 15# #### ####", "+86 18# #### ####"],
};

pub static ZH_TW: Locale = Locale {
    countries: &["TW"],
    given_names: &[
        "家豪", "怡君", "志明", "淑芬", "俊傑", "雅婷", "建宏", "美玲", "冠宇", "欣怡",
    ],
    family_names: &["陳", "林", "黃", "張", "李", "王", "吳", "劉", "蔡", "楊"],
    order: NameOrder::FamilyFirstJoined,
    phone_patterns: &["+886 9## ### ###", "09## ### ###", "(02) #### ####"],
};

pub static ZH_HK: Locale = Locale {
    countries: &["HK", "MO"],
    given_names: &[
        "嘉欣", "志強", "詠詩", "家明", "美儀", "偉文", "慧敏", "俊傑", "曉彤", "子軒",
    ],
    family_names: &["陳", "李", "張", "黃", "何", "林", "梁", "吳", "劉", "鄭"],
    order: NameOrder::FamilyFirstJoined,
    phone_patterns: &["+852 %### ####", "+852 6### ####", "+852 9### ####"],
};

pub static JA_JP: Locale = Locale {
    countries: &["JP"],
    given_names: &[
        "翔太", "陽菜", "大輝", "美咲", "蓮", "結衣", "悠斗", "さくら", "健太", "愛",
    ],
    family_names: &[
        "佐藤", "鈴木", "高橋", "田中", "伊藤", "渡辺", "山本", "中村", "小林", "加藤",
    ],
    order: NameOrder::FamilyFirstJoined,
    phone_patterns: &["+81 90-####-####", "+81 80-####-####", "03-####-####"],
};

pub static KO_KR: Locale = Locale {
    countries: &["KR"],
    given_names: &[
        "민준", "서연", "도윤", "서윤", "시우", "지우", "하준", "하은", "주원", "지민",
    ],
    family_names: &["김", "이", "박", "최", "정", "강", "조", "윤", "장", "임"],
    order: NameOrder::FamilyFirstJoined,
    phone_patterns: &["+82 10-####-####", "010-####-####", "02-###-####"],
};

pub static DE_DE: Locale = Locale {
    countries: &["DE", "AT", "CH", "LU"],
    given_names: &[
        "Lukas", "Anna", "Leon", "Lea", "Finn", "Hannah", "Jonas", "Lena", "Paul", "Mia",
        "Felix", "Sophie",
    ],
    family_names: &[
        "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker",
        "Schulz", "Hoffmann", "Koch", "Richter",
    ],
    order: NameOrder::GivenFirst,
    phone_patterns: &["+49 15# ########", "+49 17# #######", "030 ########"],
};

pub static FR_FR: Locale = Locale {
    countries: &["FR", "BE"],
    given_names: &[
        "Gabriel", "Emma", "Louis", "Jade", "Raphaël", "Louise", "Jules", "Alice", "Adam",
        "Chloé", "Hugo", "Léa",
    ],
    family_names: &[
        "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand",
        "Leroy", "Moreau", "Simon", "Laurent",
    ],
    order: NameOrder::GivenFirst,
    phone_patterns: &["+33 6 ## ## ## ##", "+33 7 ## ## ## ##", "01 ## ## ## ##"],
};

pub static IT_IT: Locale = Locale {
    countries: &["IT"],
    given_names: &[
        "Leonardo", "Sofia", "Francesco", "Giulia", "Alessandro", "Aurora", "Lorenzo",
        "Alice", "Mattia", "Ginevra",
    ],
    family_names: &[
        "Rossi", "Russo", "Ferrari", "Esposito", "Bianchi", "Romano", "Colombo", "Ricci",
        "Marino", "Greco",
    ],
    order: NameOrder::GivenFirst,
    phone_patterns: &["+39 3## ### ####", "06 #### ####"],
};

pub static ES_ES: Locale = Locale {
    countries: &["ES"],
    given_names: &[
        "Hugo", "Lucía", "Martín", "Sofía", "Pablo", "María", "Alejandro", "Martina",
        "Daniel", "Paula",
    ],
    family_names: &[
        "García", "Rodríguez", "González", "Fernández", "López", "Martínez", "Sánchez",
        "Pérez", "Gómez", "Martín",
    ],
    order: NameOrder::GivenFirst,
    phone_patterns: &["+34 6## ### ###", "+34 91# ### ###"],
};

pub static ES_LATAM: Locale = Locale {
    countries: &["MX", "AR", "CL", "CO", "PE"],
    given_names: &[
        "Santiago", "Valentina", "Mateo", "Camila", "Sebastián", "Isabella", "Diego",
        "Daniela", "Emiliano", "Sofía",
    ],
    family_names: &[
        "Hernández", "García", "Martínez", "López", "González", "Rodríguez", "Pérez",
        "Sánchez", "Ramírez", "Torres",
    ],
    order: NameOrder::GivenFirst,
    phone_patterns: &["+52 55 #### ####", "+54 9 11 ####-####", "+57 3## ### ####"],
};

pub static PT_BR: Locale = Locale {
    countries: &["BR", "PT"],
    given_names: &[
        "Miguel", "Helena", "Arthur", "Alice", "Gael", "Laura", "Heitor", "Maria", "Theo",
        "Valentina",
    ],
    family_names: &[
        "Silva", "Santos", "Oliveira", "Souza", "Rodrigues", "Ferreira", "Alves", "Pereira",
        "Lima", "Gomes",
    ],
    order: NameOrder::GivenFirst,
    phone_patterns: &["+55 11 9####-####", "+55 21 9####-####"],
};

pub static RU_RU: Locale = Locale {
    countries: &["RU", "KZ"],
    given_names: &[
        "Александр", "Анастасия", "Дмитрий", "Мария", "Максим", "Анна", "Иван", "Екатерина",
        "Сергей", "Ольга",
    ],
    family_names: &[
        "Иванов", "Смирнов", "Кузнецов", "Попов", "Васильев", "Петров", "Соколов",
        "Михайлов", "Новиков", "Фёдоров",
    ],
    order: NameOrder::GivenFirst,
    phone_patterns: &["+7 9## ###-##-##", "8 (495) ###-##-##"],
};

pub static NL_NL: Locale = Locale {
    countries: &["NL"],
    given_names: &[
        "Noah", "Emma", "Sem", "Julia", "Liam", "Mila", "Lucas", "Tess", "Daan", "Sophie",
    ],
    family_names: &[
        "de Jong", "Jansen", "de Vries", "van den Berg", "van Dijk", "Bakker", "Janssen",
        "Visser", "Smit", "Meijer",
    ],
    order: NameOrder::GivenFirst,
    phone_patterns: &["+31 6 ########", "020 ### ####"],
};

/// Every locale, searched in order. `EN_US` doubles as the fallback.
pub static LOCALES: &[&Locale] = &[
    &EN_US, &EN_GB, &EN_CA, &EN_AU, &EN_IN, &ZH_CN, &ZH_TW, &ZH_HK, &JA_JP, &KO_KR, &DE_DE,
    &FR_FR, &IT_IT, &ES_ES, &ES_LATAM, &PT_BR, &RU_RU, &NL_NL,
];

/// Locale for an ISO alpha-2 country code, falling back to US English.
pub fn locale_for(country_code: &str) -> &'static Locale {
    LOCALES
        .iter()
        .copied()
        .find(|locale| {
            locale
                .countries
                .iter()
                .any(|c| c.eq_ignore_ascii_case(country_code))
        })
        .unwrap_or(&EN_US)
}
