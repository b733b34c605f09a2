//! Curated country aliases.
//!
//! Each entry carries the ISO 3166-1 codes, the English display name and a
//! curated list of aliases: colloquial English names, Chinese (simplified and
//! traditional) names, and common native or European-language names.
//! Aliases are matched after normalization (lowercase, no dots, single
//! spaces), so they are written in that form here.

/// One row of the country table.
#[derive(Debug, Clone, Copy)]
pub struct CountryEntry {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

pub static COUNTRIES: &[CountryEntry] = &[
    CountryEntry {
        alpha2: "US",
        alpha3: "USA",
        name: "United States",
        aliases: &[
            "united states of america",
            "america",
            "usa",
            "us of a",
            "美国",
            "美國",
            "米国",
            "アメリカ",
            "미국",
            "estados unidos",
            "états-unis",
            "etats-unis",
            "vereinigte staaten",
        ],
    },
    CountryEntry {
        alpha2: "GB",
        alpha3: "GBR",
        name: "United Kingdom",
        aliases: &[
            "uk",
            "great britain",
            "britain",
            "england",
            "scotland",
            "wales",
            "northern ireland",
            "英国",
            "英國",
            "イギリス",
            "영국",
            "royaume-uni",
            "reino unido",
            "vereinigtes königreich",
        ],
    },
    CountryEntry {
        alpha2: "CN",
        alpha3: "CHN",
        name: "China",
        aliases: &[
            "people's republic of china",
            "peoples republic of china",
            "prc",
            "mainland china",
            "中国",
            "中國",
            "中华人民共和国",
            "中国大陆",
            "중국",
            "chine",
        ],
    },
    CountryEntry {
        alpha2: "JP",
        alpha3: "JPN",
        name: "Japan",
        aliases: &["日本", "nippon", "nihon", "japon", "일본"],
    },
    CountryEntry {
        alpha2: "DE",
        alpha3: "DEU",
        name: "Germany",
        aliases: &[
            "deutschland",
            "德国",
            "德國",
            "ドイツ",
            "독일",
            "allemagne",
            "alemania",
            "germania",
        ],
    },
    CountryEntry {
        alpha2: "FR",
        alpha3: "FRA",
        name: "France",
        aliases: &["法国", "法國", "フランス", "프랑스", "frankreich", "francia"],
    },
    CountryEntry {
        alpha2: "KR",
        alpha3: "KOR",
        name: "South Korea",
        aliases: &[
            "korea",
            "republic of korea",
            "韩国",
            "韓國",
            "韓国",
            "대한민국",
            "한국",
            "corée du sud",
            "corea del sur",
            "südkorea",
        ],
    },
    CountryEntry {
        alpha2: "KP",
        alpha3: "PRK",
        name: "North Korea",
        aliases: &[
            "democratic people's republic of korea",
            "dprk",
            "朝鲜",
            "朝鮮",
            "북한",
            "조선",
            "nordkorea",
        ],
    },
    CountryEntry {
        alpha2: "IT",
        alpha3: "ITA",
        name: "Italy",
        aliases: &["italia", "意大利", "義大利", "イタリア", "이탈리아", "italie", "italien"],
    },
    CountryEntry {
        alpha2: "ES",
        alpha3: "ESP",
        name: "Spain",
        aliases: &["españa", "espana", "西班牙", "スペイン", "스페인", "espagne", "spanien"],
    },
    CountryEntry {
        alpha2: "RU",
        alpha3: "RUS",
        name: "Russia",
        aliases: &[
            "russian federation",
            "россия",
            "俄罗斯",
            "俄羅斯",
            "ロシア",
            "러시아",
            "russie",
            "russland",
            "rusia",
        ],
    },
    CountryEntry {
        alpha2: "IN",
        alpha3: "IND",
        name: "India",
        aliases: &["bharat", "भारत", "印度", "インド", "인도", "inde", "indien"],
    },
    CountryEntry {
        alpha2: "BR",
        alpha3: "BRA",
        name: "Brazil",
        aliases: &["brasil", "巴西", "ブラジル", "브라질", "brésil", "brasilien"],
    },
    CountryEntry {
        alpha2: "CA",
        alpha3: "CAN",
        name: "Canada",
        aliases: &["加拿大", "カナダ", "캐나다", "kanada"],
    },
    CountryEntry {
        alpha2: "AU",
        alpha3: "AUS",
        name: "Australia",
        aliases: &[
            "澳大利亚",
            "澳大利亞",
            "澳洲",
            "オーストラリア",
            "호주",
            "australie",
            "australien",
        ],
    },
    CountryEntry {
        alpha2: "TW",
        alpha3: "TWN",
        name: "Taiwan",
        aliases: &["台湾", "台灣", "臺灣", "대만"],
    },
    CountryEntry {
        alpha2: "HK",
        alpha3: "HKG",
        name: "Hong Kong",
        aliases: &["hongkong", "香港", "홍콩"],
    },
    CountryEntry {
        alpha2: "MO",
        alpha3: "MAC",
        name: "Macao",
        aliases: &["macau", "澳门", "澳門"],
    },
    CountryEntry {
        alpha2: "SG",
        alpha3: "SGP",
        name: "Singapore",
        aliases: &["新加坡", "シンガポール", "싱가포르", "singapur"],
    },
    CountryEntry {
        alpha2: "MX",
        alpha3: "MEX",
        name: "Mexico",
        aliases: &["méxico", "墨西哥", "メキシコ", "mexique", "mexiko"],
    },
    CountryEntry {
        alpha2: "NL",
        alpha3: "NLD",
        name: "Netherlands",
        aliases: &[
            "holland",
            "nederland",
            "荷兰",
            "荷蘭",
            "オランダ",
            "pays-bas",
            "niederlande",
            "países bajos",
        ],
    },
    CountryEntry {
        alpha2: "BE",
        alpha3: "BEL",
        name: "Belgium",
        aliases: &["belgië", "belgique", "belgien", "比利时", "比利時"],
    },
    CountryEntry {
        alpha2: "CH",
        alpha3: "CHE",
        name: "Switzerland",
        aliases: &["schweiz", "suisse", "svizzera", "瑞士", "スイス"],
    },
    CountryEntry {
        alpha2: "AT",
        alpha3: "AUT",
        name: "Austria",
        aliases: &["österreich", "osterreich", "奥地利", "奧地利", "autriche"],
    },
    CountryEntry {
        alpha2: "SE",
        alpha3: "SWE",
        name: "Sweden",
        aliases: &["sverige", "瑞典", "suède", "schweden"],
    },
    CountryEntry {
        alpha2: "NO",
        alpha3: "NOR",
        name: "Norway",
        aliases: &["norge", "挪威", "norvège", "norwegen"],
    },
    CountryEntry {
        alpha2: "DK",
        alpha3: "DNK",
        name: "Denmark",
        aliases: &["danmark", "丹麦", "丹麥", "dänemark"],
    },
    CountryEntry {
        alpha2: "FI",
        alpha3: "FIN",
        name: "Finland",
        aliases: &["suomi", "芬兰", "芬蘭", "finnland"],
    },
    CountryEntry {
        alpha2: "PL",
        alpha3: "POL",
        name: "Poland",
        aliases: &["polska", "波兰", "波蘭", "pologne", "polen"],
    },
    CountryEntry {
        alpha2: "PT",
        alpha3: "PRT",
        name: "Portugal",
        aliases: &["葡萄牙", "ポルトガル"],
    },
    CountryEntry {
        alpha2: "IE",
        alpha3: "IRL",
        name: "Ireland",
        aliases: &["éire", "eire", "爱尔兰", "愛爾蘭", "irland"],
    },
    CountryEntry {
        alpha2: "GR",
        alpha3: "GRC",
        name: "Greece",
        aliases: &["hellas", "ελλάδα", "希腊", "希臘", "grèce", "griechenland"],
    },
    CountryEntry {
        alpha2: "TR",
        alpha3: "TUR",
        name: "Turkey",
        aliases: &["türkiye", "turkiye", "土耳其", "turquie", "türkei"],
    },
    CountryEntry {
        alpha2: "UA",
        alpha3: "UKR",
        name: "Ukraine",
        aliases: &["україна", "乌克兰", "烏克蘭"],
    },
    CountryEntry {
        alpha2: "CZ",
        alpha3: "CZE",
        name: "Czechia",
        aliases: &["czech republic", "česko", "cesko", "捷克"],
    },
    CountryEntry {
        alpha2: "HU",
        alpha3: "HUN",
        name: "Hungary",
        aliases: &["magyarország", "匈牙利", "ungarn"],
    },
    CountryEntry {
        alpha2: "RO",
        alpha3: "ROU",
        name: "Romania",
        aliases: &["românia", "罗马尼亚", "羅馬尼亞", "rumänien"],
    },
    CountryEntry {
        alpha2: "NZ",
        alpha3: "NZL",
        name: "New Zealand",
        aliases: &["aotearoa", "新西兰", "紐西蘭", "ニュージーランド"],
    },
    CountryEntry {
        alpha2: "ZA",
        alpha3: "ZAF",
        name: "South Africa",
        aliases: &["南非", "afrique du sud", "südafrika", "sudáfrica"],
    },
    CountryEntry {
        alpha2: "EG",
        alpha3: "EGY",
        name: "Egypt",
        aliases: &["مصر", "埃及", "égypte", "ägypten"],
    },
    CountryEntry {
        alpha2: "NG",
        alpha3: "NGA",
        name: "Nigeria",
        aliases: &["尼日利亚", "奈及利亞"],
    },
    CountryEntry {
        alpha2: "KE",
        alpha3: "KEN",
        name: "Kenya",
        aliases: &["肯尼亚", "肯亞"],
    },
    CountryEntry {
        alpha2: "AR",
        alpha3: "ARG",
        name: "Argentina",
        aliases: &["阿根廷", "argentine", "argentinien"],
    },
    CountryEntry {
        alpha2: "CL",
        alpha3: "CHL",
        name: "Chile",
        aliases: &["智利"],
    },
    CountryEntry {
        alpha2: "CO",
        alpha3: "COL",
        name: "Colombia",
        aliases: &["哥伦比亚", "哥倫比亞", "colombie", "kolumbien"],
    },
    CountryEntry {
        alpha2: "PE",
        alpha3: "PER",
        name: "Peru",
        aliases: &["perú", "秘鲁", "秘魯", "pérou"],
    },
    CountryEntry {
        alpha2: "TH",
        alpha3: "THA",
        name: "Thailand",
        aliases: &["ประเทศไทย", "泰国", "泰國", "タイ", "태국", "thaïlande"],
    },
    CountryEntry {
        alpha2: "VN",
        alpha3: "VNM",
        name: "Vietnam",
        aliases: &["viet nam", "việt nam", "越南", "ベトナム", "베트남"],
    },
    CountryEntry {
        alpha2: "MY",
        alpha3: "MYS",
        name: "Malaysia",
        aliases: &["马来西亚", "馬來西亞", "マレーシア"],
    },
    CountryEntry {
        alpha2: "ID",
        alpha3: "IDN",
        name: "Indonesia",
        aliases: &["印度尼西亚", "印度尼西亞", "印尼", "インドネシア"],
    },
    CountryEntry {
        alpha2: "PH",
        alpha3: "PHL",
        name: "Philippines",
        aliases: &["pilipinas", "菲律宾", "菲律賓", "フィリピン"],
    },
    CountryEntry {
        alpha2: "PK",
        alpha3: "PAK",
        name: "Pakistan",
        aliases: &["巴基斯坦", "پاکستان"],
    },
    CountryEntry {
        alpha2: "BD",
        alpha3: "BGD",
        name: "Bangladesh",
        aliases: &["孟加拉国", "孟加拉", "বাংলাদেশ"],
    },
    CountryEntry {
        alpha2: "SA",
        alpha3: "SAU",
        name: "Saudi Arabia",
        aliases: &["السعودية", "沙特阿拉伯", "沙特", "ksa"],
    },
    CountryEntry {
        alpha2: "AE",
        alpha3: "ARE",
        name: "United Arab Emirates",
        aliases: &["uae", "emirates", "阿联酋", "阿拉伯联合酋长国", "الإمارات"],
    },
    CountryEntry {
        alpha2: "IL",
        alpha3: "ISR",
        name: "Israel",
        aliases: &["以色列", "ישראל"],
    },
    CountryEntry {
        alpha2: "IR",
        alpha3: "IRN",
        name: "Iran",
        aliases: &["伊朗", "ایران", "islamic republic of iran"],
    },
    CountryEntry {
        alpha2: "IS",
        alpha3: "ISL",
        name: "Iceland",
        aliases: &["ísland", "冰岛", "冰島", "island"],
    },
    CountryEntry {
        alpha2: "LU",
        alpha3: "LUX",
        name: "Luxembourg",
        aliases: &["卢森堡", "盧森堡", "luxemburg"],
    },
    CountryEntry {
        alpha2: "MN",
        alpha3: "MNG",
        name: "Mongolia",
        aliases: &["蒙古", "蒙古国", "монгол улс"],
    },
    CountryEntry {
        alpha2: "KZ",
        alpha3: "KAZ",
        name: "Kazakhstan",
        aliases: &["哈萨克斯坦", "哈薩克", "қазақстан"],
    },
];
