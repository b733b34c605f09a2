//! ISO 3166-1 country list.
//!
//! Every officially assigned alpha-2 code with its alpha-3 code, a short
//! English name and the simplified Chinese name. Colloquial and native
//! aliases live in the curated table.

/// One ISO 3166-1 country.
#[derive(Debug, Clone, Copy)]
pub struct IsoCountry {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub name: &'static str,
    pub name_zh: &'static str,
}

const fn iso(
    alpha2: &'static str,
    alpha3: &'static str,
    name: &'static str,
    name_zh: &'static str,
) -> IsoCountry {
    IsoCountry {
        alpha2,
        alpha3,
        name,
        name_zh,
    }
}

/// Sorted by alpha-2 code.
pub static ISO_3166_COUNTRIES: &[IsoCountry] = &[
    iso("AD", "AND", "Andorra", "安道尔"),
    iso("AE", "ARE", "United Arab Emirates", "阿联酋"),
    iso("AF", "AFG", "Afghanistan", "阿富汗"),
    iso("AG", "ATG", "Antigua and Barbuda", "安提瓜和巴布达"),
    iso("AI", "AIA", "Anguilla", "安圭拉"),
    iso("AL", "ALB", "Albania", "阿尔巴尼亚"),
    iso("AM", "ARM", "Armenia", "亚美尼亚"),
    iso("AO", "AGO", "Angola", "安哥拉"),
    iso("AQ", "ATA", "Antarctica", "南极洲"),
    iso("AR", "ARG", "Argentina", "阿根廷"),
    iso("AS", "ASM", "American Samoa", "美属萨摩亚"),
    iso("AT", "AUT", "Austria", "奥地利"),
    iso("AU", "AUS", "Australia", "澳大利亚"),
    iso("AW", "ABW", "Aruba", "阿鲁巴"),
    iso("AX", "ALA", "Åland Islands", "奥兰群岛"),
    iso("AZ", "AZE", "Azerbaijan", "阿塞拜疆"),
    iso("BA", "BIH", "Bosnia and Herzegovina", "波斯尼亚和黑塞哥维那"),
    iso("BB", "BRB", "Barbados", "巴巴多斯"),
    iso("BD", "BGD", "Bangladesh", "孟加拉国"),
    iso("BE", "BEL", "Belgium", "比利时"),
    iso("BF", "BFA", "Burkina Faso", "布基纳法索"),
    iso("BG", "BGR", "Bulgaria", "保加利亚"),
    iso("BH", "BHR", "Bahrain", "巴林"),
    iso("BI", "BDI", "Burundi", "布隆迪"),
    iso("BJ", "BEN", "Benin", "贝宁"),
    iso("BL", "BLM", "Saint Barthélemy", "圣巴泰勒米"),
    iso("BM", "BMU", "Bermuda", "百慕大"),
    iso("BN", "BRN", "Brunei", "文莱"),
    iso("BO", "BOL", "Bolivia", "玻利维亚"),
    iso("BQ", "BES", "Caribbean Netherlands", "荷属加勒比区"),
    iso("BR", "BRA", "Brazil", "巴西"),
    iso("BS", "BHS", "Bahamas", "巴哈马"),
    iso("BT", "BTN", "Bhutan", "不丹"),
    iso("BV", "BVT", "Bouvet Island", "布韦岛"),
    iso("BW", "BWA", "Botswana", "博茨瓦纳"),
    iso("BY", "BLR", "Belarus", "白俄罗斯"),
    iso("BZ", "BLZ", "Belize", "伯利兹"),
    iso("CA", "CAN", "Canada", "加拿大"),
    iso("CC", "CCK", "Cocos (Keeling) Islands", "科科斯群岛"),
    iso("CD", "COD", "Democratic Republic of the Congo", "刚果民主共和国"),
    iso("CF", "CAF", "Central African Republic", "中非共和国"),
    iso("CG", "COG", "Congo", "刚果共和国"),
    iso("CH", "CHE", "Switzerland", "瑞士"),
    iso("CI", "CIV", "Côte d'Ivoire", "科特迪瓦"),
    iso("CK", "COK", "Cook Islands", "库克群岛"),
    iso("CL", "CHL", "Chile", "智利"),
    iso("CM", "CMR", "Cameroon", "喀麦隆"),
    iso("CN", "CHN", "China", "中国"),
    iso("CO", "COL", "Colombia", "哥伦比亚"),
    iso("CR", "CRI", "Costa Rica", "哥斯达黎加"),
    iso("CU", "CUB", "Cuba", "古巴"),
    iso("CV", "CPV", "Cape Verde", "佛得角"),
    iso("CW", "CUW", "Curaçao", "库拉索"),
    iso("CX", "CXR", "Christmas Island", "圣诞岛"),
    iso("CY", "CYP", "Cyprus", "塞浦路斯"),
    iso("CZ", "CZE", "Czechia", "捷克"),
    iso("DE", "DEU", "Germany", "德国"),
    iso("DJ", "DJI", "Djibouti", "吉布提"),
    iso("DK", "DNK", "Denmark", "丹麦"),
    iso("DM", "DMA", "Dominica", "多米尼克"),
    iso("DO", "DOM", "Dominican Republic", "多米尼加"),
    iso("DZ", "DZA", "Algeria", "阿尔及利亚"),
    iso("EC", "ECU", "Ecuador", "厄瓜多尔"),
    iso("EE", "EST", "Estonia", "爱沙尼亚"),
    iso("EG", "EGY", "Egypt", "埃及"),
    iso("EH", "ESH", "Western Sahara", "西撒哈拉"),
    iso("ER", "ERI", "Eritrea", "厄立特里亚"),
    iso("ES", "ESP", "Spain", "西班牙"),
    iso("ET", "ETH", "Ethiopia", "埃塞俄比亚"),
    iso("FI", "FIN", "Finland", "芬兰"),
    iso("FJ", "FJI", "Fiji", "斐济"),
    iso("FK", "FLK", "Falkland Islands", "福克兰群岛"),
    iso("FM", "FSM", "Micronesia", "密克罗尼西亚"),
    iso("FO", "FRO", "Faroe Islands", "法罗群岛"),
    iso("FR", "FRA", "France", "法国"),
    iso("GA", "GAB", "Gabon", "加蓬"),
    iso("GB", "GBR", "United Kingdom", "英国"),
    iso("GD", "GRD", "Grenada", "格林纳达"),
    iso("GE", "GEO", "Georgia", "格鲁吉亚"),
    iso("GF", "GUF", "French Guiana", "法属圭亚那"),
    iso("GG", "GGY", "Guernsey", "根西岛"),
    iso("GH", "GHA", "Ghana", "加纳"),
    iso("GI", "GIB", "Gibraltar", "直布罗陀"),
    iso("GL", "GRL", "Greenland", "格陵兰"),
    iso("GM", "GMB", "Gambia", "冈比亚"),
    iso("GN", "GIN", "Guinea", "几内亚"),
    iso("GP", "GLP", "Guadeloupe", "瓜德罗普"),
    iso("GQ", "GNQ", "Equatorial Guinea", "赤道几内亚"),
    iso("GR", "GRC", "Greece", "希腊"),
    iso("GS", "SGS", "South Georgia and the South Sandwich Islands", "南乔治亚和南桑威奇群岛"),
    iso("GT", "GTM", "Guatemala", "危地马拉"),
    iso("GU", "GUM", "Guam", "关岛"),
    iso("GW", "GNB", "Guinea-Bissau", "几内亚比绍"),
    iso("GY", "GUY", "Guyana", "圭亚那"),
    iso("HK", "HKG", "Hong Kong", "香港"),
    iso("HM", "HMD", "Heard Island and McDonald Islands", "赫德岛和麦克唐纳群岛"),
    iso("HN", "HND", "Honduras", "洪都拉斯"),
    iso("HR", "HRV", "Croatia", "克罗地亚"),
    iso("HT", "HTI", "Haiti", "海地"),
    iso("HU", "HUN", "Hungary", "匈牙利"),
    iso("ID", "IDN", "Indonesia", "印度尼西亚"),
    iso("IE", "IRL", "Ireland", "爱尔兰"),
    iso("IL", "ISR", "Israel", "以色列"),
    iso("IM", "IMN", "Isle of Man", "马恩岛"),
    iso("IN", "IND", "India", "印度"),
    iso("IO", "IOT", "British Indian Ocean Territory", "英属印度洋领地"),
    iso("IQ", "IRQ", "Iraq", "伊拉克"),
    iso("IR", "IRN", "Iran", "伊朗"),
    iso("IS", "ISL", "Iceland", "冰岛"),
    iso("IT", "ITA", "Italy", "意大利"),
    iso("JE", "JEY", "Jersey", "泽西岛"),
    iso("JM", "JAM", "Jamaica", "牙买加"),
    iso("JO", "JOR", "Jordan", "约旦"),
    iso("JP", "JPN", "Japan", "日本"),
    iso("KE", "KEN", "Kenya", "肯尼亚"),
    iso("KG", "KGZ", "Kyrgyzstan", "吉尔吉斯斯坦"),
    iso("KH", "KHM", "Cambodia", "柬埔寨"),
    iso("KI", "KIR", "Kiribati", "基里巴斯"),
    iso("KM", "COM", "Comoros", "科摩罗"),
    iso("KN", "KNA", "Saint Kitts and Nevis", "圣基茨和尼维斯"),
    iso("KP", "PRK", "North Korea", "朝鲜"),
    iso("KR", "KOR", "South Korea", "韩国"),
    iso("KW", "KWT", "Kuwait", "科威特"),
    iso("KY", "CYM", "Cayman Islands", "开曼群岛"),
    iso("KZ", "KAZ", "Kazakhstan", "哈萨克斯坦"),
    iso("LA", "LAO", "Laos", "老挝"),
    iso("LB", "LBN", "Lebanon", "黎巴嫩"),
    iso("LC", "LCA", "Saint Lucia", "圣卢西亚"),
    iso("LI", "LIE", "Liechtenstein", "列支敦士登"),
    iso("LK", "LKA", "Sri Lanka", "斯里兰卡"),
    iso("LR", "LBR", "Liberia", "利比里亚"),
    iso("LS", "LSO", "Lesotho", "莱索托"),
    iso("LT", "LTU", "Lithuania", "立陶宛"),
    iso("LU", "LUX", "Luxembourg", "卢森堡"),
    iso("LV", "LVA", "Latvia", "拉脱维亚"),
    iso("LY", "LBY", "Libya", "利比亚"),
    iso("MA", "MAR", "Morocco", "摩洛哥"),
    iso("MC", "MCO", "Monaco", "摩纳哥"),
    iso("MD", "MDA", "Moldova", "摩尔多瓦"),
    iso("ME", "MNE", "Montenegro", "黑山"),
    iso("MF", "MAF", "Saint Martin", "法属圣马丁"),
    iso("MG", "MDG", "Madagascar", "马达加斯加"),
    iso("MH", "MHL", "Marshall Islands", "马绍尔群岛"),
    iso("MK", "MKD", "North Macedonia", "北马其顿"),
    iso("ML", "MLI", "Mali", "马里"),
    iso("MM", "MMR", "Myanmar", "缅甸"),
    iso("MN", "MNG", "Mongolia", "蒙古"),
    iso("MO", "MAC", "Macao", "澳门"),
    iso("MP", "MNP", "Northern Mariana Islands", "北马里亚纳群岛"),
    iso("MQ", "MTQ", "Martinique", "马提尼克"),
    iso("MR", "MRT", "Mauritania", "毛里塔尼亚"),
    iso("MS", "MSR", "Montserrat", "蒙特塞拉特"),
    iso("MT", "MLT", "Malta", "马耳他"),
    iso("MU", "MUS", "Mauritius", "毛里求斯"),
    iso("MV", "MDV", "Maldives", "马尔代夫"),
    iso("MW", "MWI", "Malawi", "马拉维"),
    iso("MX", "MEX", "Mexico", "墨西哥"),
    iso("MY", "MYS", "Malaysia", "马来西亚"),
    iso("MZ", "MOZ", "Mozambique", "莫桑比克"),
    iso("NA", "NAM", "Namibia", "纳米比亚"),
    iso("NC", "NCL", "New Caledonia", "新喀里多尼亚"),
    iso("NE", "NER", "Niger", "尼日尔"),
    iso("NF", "NFK", "Norfolk Island", "诺福克岛"),
    iso("NG", "NGA", "Nigeria", "尼日利亚"),
    iso("NI", "NIC", "Nicaragua", "尼加拉瓜"),
    iso("NL", "NLD", "Netherlands", "荷兰"),
    iso("NO", "NOR", "Norway", "挪威"),
    iso("NP", "NPL", "Nepal", "尼泊尔"),
    iso("NR", "NRU", "Nauru", "瑙鲁"),
    iso("NU", "NIU", "Niue", "纽埃"),
    iso("NZ", "NZL", "New Zealand", "新西兰"),
    iso("OM", "OMN", "Oman", "阿曼"),
    iso("PA", "PAN", "Panama", "巴拿马"),
    iso("PE", "PER", "Peru", "秘鲁"),
    iso("PF", "PYF", "French Polynesia", "法属波利尼西亚"),
    iso("PG", "PNG", "Papua New Guinea", "巴布亚新几内亚"),
    iso("PH", "PHL", "Philippines", "菲律宾"),
    iso("PK", "PAK", "Pakistan", "巴基斯坦"),
    iso("PL", "POL", "Poland", "波兰"),
    iso("PM", "SPM", "Saint Pierre and Miquelon", "圣皮埃尔和密克隆"),
    iso("PN", "PCN", "Pitcairn Islands", "皮特凯恩群岛"),
    iso("PR", "PRI", "Puerto Rico", "波多黎各"),
    iso("PS", "PSE", "Palestine", "巴勒斯坦"),
    iso("PT", "PRT", "Portugal", "葡萄牙"),
    iso("PW", "PLW", "Palau", "帕劳"),
    iso("PY", "PRY", "Paraguay", "巴拉圭"),
    iso("QA", "QAT", "Qatar", "卡塔尔"),
    iso("RE", "REU", "Réunion", "留尼汪"),
    iso("RO", "ROU", "Romania", "罗马尼亚"),
    iso("RS", "SRB", "Serbia", "塞尔维亚"),
    iso("RU", "RUS", "Russia", "俄罗斯"),
    iso("RW", "RWA", "Rwanda", "卢旺达"),
    iso("SA", "SAU", "Saudi Arabia", "沙特阿拉伯"),
    iso("SB", "SLB", "Solomon Islands", "所罗门群岛"),
    iso("SC", "SYC", "Seychelles", "塞舌尔"),
    iso("SD", "SDN", "Sudan", "苏丹"),
    iso("SE", "SWE", "Sweden", "瑞典"),
    iso("SG", "SGP", "Singapore", "新加坡"),
    iso("SH", "SHN", "Saint Helena", "圣赫勒拿"),
    iso("SI", "SVN", "Slovenia", "斯洛文尼亚"),
    iso("SJ", "SJM", "Svalbard and Jan Mayen", "斯瓦尔巴和扬马延"),
    iso("SK", "SVK", "Slovakia", "斯洛伐克"),
    iso("SL", "SLE", "Sierra Leone", "塞拉利昂"),
    iso("SM", "SMR", "San Marino", "圣马力诺"),
    iso("SN", "SEN", "Senegal", "塞内加尔"),
    iso("SO", "SOM", "Somalia", "索马里"),
    iso("SR", "SUR", "Suriname", "苏里南"),
    iso("SS", "SSD", "South Sudan", "南苏丹"),
    iso("ST", "STP", "São Tomé and Príncipe", "圣多美和普林西比"),
    iso("SV", "SLV", "El Salvador", "萨尔瓦多"),
    iso("SX", "SXM", "Sint Maarten", "荷属圣马丁"),
    iso("SY", "SYR", "Syria", "叙利亚"),
    iso("SZ", "SWZ", "Eswatini", "斯威士兰"),
    iso("TC", "TCA", "Turks and Caicos Islands", "特克斯和凯科斯群岛"),
    iso("TD", "TCD", "Chad", "乍得"),
    iso("TF", "ATF", "French Southern Territories", "法属南部领地"),
    iso("TG", "TGO", "Togo", "多哥"),
    iso("TH", "THA", "Thailand", "泰国"),
    iso("TJ", "TJK", "Tajikistan", "塔吉克斯坦"),
    iso("TK", "TKL", "Tokelau", "托克劳"),
    iso("TL", "TLS", "Timor-Leste", "东帝汶"),
    iso("TM", "TKM", "Turkmenistan", "土库曼斯坦"),
    iso("TN", "TUN", "Tunisia", "突尼斯"),
    iso("TO", "TON", "Tonga", "汤加"),
    iso("TR", "TUR", "Turkey", "土耳其"),
    iso("TT", "TTO", "Trinidad and Tobago", "特立尼达和多巴哥"),
    iso("TV", "TUV", "Tuvalu", "图瓦卢"),
    iso("TW", "TWN", "Taiwan", "台湾"),
    iso("TZ", "TZA", "Tanzania", "坦桑尼亚"),
    iso("UA", "UKR", "Ukraine", "乌克兰"),
    iso("UG", "UGA", "Uganda", "乌干达"),
    iso("UM", "UMI", "United States Minor Outlying Islands", "美国本土外小岛屿"),
    iso("US", "USA", "United States", "美国"),
    iso("UY", "URY", "Uruguay", "乌拉圭"),
    iso("UZ", "UZB", "Uzbekistan", "乌兹别克斯坦"),
    iso("VA", "VAT", "Vatican City", "梵蒂冈"),
    iso("VC", "VCT", "Saint Vincent and the Grenadines", "圣文森特和格林纳丁斯"),
    iso("VE", "VEN", "Venezuela", "委内瑞拉"),
    iso("VG", "VGB", "British Virgin Islands", "英属维尔京群岛"),
    iso("VI", "VIR", "United States Virgin Islands", "美属维尔京群岛"),
    iso("VN", "VNM", "Vietnam", "越南"),
    iso("VU", "VUT", "Vanuatu", "瓦努阿图"),
    iso("WF", "WLF", "Wallis and Futuna", "瓦利斯和富图纳"),
    iso("WS", "WSM", "Samoa", "萨摩亚"),
    iso("YE", "YEM", "Yemen", "也门"),
    iso("YT", "MYT", "Mayotte", "马约特"),
    iso("ZA", "ZAF", "South Africa", "南非"),
    iso("ZM", "ZMB", "Zambia", "赞比亚"),
    iso("ZW", "ZWE", "Zimbabwe", "津巴布韦"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique_and_well_formed() {
        assert_eq!(ISO_3166_COUNTRIES.len(), 249);
        let mut alpha2 = HashSet::new();
        let mut alpha3 = HashSet::new();
        for country in ISO_3166_COUNTRIES {
            assert_eq!(country.alpha2.len(), 2, "{:?}", country);
            assert_eq!(country.alpha3.len(), 3, "{:?}", country);
            assert!(country.alpha2.chars().all(|c| c.is_ascii_uppercase()));
            assert!(country.alpha3.chars().all(|c| c.is_ascii_uppercase()));
            assert!(alpha2.insert(country.alpha2), "duplicate {}", country.alpha2);
            assert!(alpha3.insert(country.alpha3), "duplicate {}", country.alpha3);
        }
    }

    #[test]
    fn test_sorted_by_alpha2() {
        assert!(ISO_3166_COUNTRIES
            .windows(2)
            .all(|pair| pair[0].alpha2 < pair[1].alpha2));
    }
}
