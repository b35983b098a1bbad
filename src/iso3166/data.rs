//! The compiled-in ISO 3166-1 dataset.
//!
//! The table is a process-wide immutable constant: it is materialized into
//! [`Record`]s and handed to [`Registry::build`] exactly once, on first use
//! of [`registry`]. Nothing mutates it afterwards.

use once_cell::sync::Lazy;

use super::models::Record;
use super::registry::Registry;

/// One dataset row: `(name, alpha2, alpha3, numeric, currencies)`.
type CountryRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
);

/// All 249 officially assigned ISO 3166-1 entries, ordered by English short
/// name.
pub const COUNTRIES: &[CountryRow] = &[
    ("Afghanistan", "AF", "AFG", "004", &["AFN"]),
    ("Åland Islands", "AX", "ALA", "248", &["EUR"]),
    ("Albania", "AL", "ALB", "008", &["ALL"]),
    ("Algeria", "DZ", "DZA", "012", &["DZD"]),
    ("American Samoa", "AS", "ASM", "016", &["USD"]),
    ("Andorra", "AD", "AND", "020", &["EUR"]),
    ("Angola", "AO", "AGO", "024", &["AOA"]),
    ("Anguilla", "AI", "AIA", "660", &["XCD"]),
    ("Antarctica", "AQ", "ATA", "010", &[]),
    ("Antigua and Barbuda", "AG", "ATG", "028", &["XCD"]),
    ("Argentina", "AR", "ARG", "032", &["ARS"]),
    ("Armenia", "AM", "ARM", "051", &["AMD"]),
    ("Aruba", "AW", "ABW", "533", &["AWG"]),
    ("Australia", "AU", "AUS", "036", &["AUD"]),
    ("Austria", "AT", "AUT", "040", &["EUR"]),
    ("Azerbaijan", "AZ", "AZE", "031", &["AZN"]),
    ("Bahamas", "BS", "BHS", "044", &["BSD"]),
    ("Bahrain", "BH", "BHR", "048", &["BHD"]),
    ("Bangladesh", "BD", "BGD", "050", &["BDT"]),
    ("Barbados", "BB", "BRB", "052", &["BBD"]),
    ("Belarus", "BY", "BLR", "112", &["BYN"]),
    ("Belgium", "BE", "BEL", "056", &["EUR"]),
    ("Belize", "BZ", "BLZ", "084", &["BZD"]),
    ("Benin", "BJ", "BEN", "204", &["XOF"]),
    ("Bermuda", "BM", "BMU", "060", &["BMD"]),
    ("Bhutan", "BT", "BTN", "064", &["BTN", "INR"]),
    ("Bolivia (Plurinational State of)", "BO", "BOL", "068", &["BOB"]),
    ("Bonaire, Sint Eustatius and Saba", "BQ", "BES", "535", &["USD"]),
    ("Bosnia and Herzegovina", "BA", "BIH", "070", &["BAM"]),
    ("Botswana", "BW", "BWA", "072", &["BWP"]),
    ("Bouvet Island", "BV", "BVT", "074", &["NOK"]),
    ("Brazil", "BR", "BRA", "076", &["BRL"]),
    ("British Indian Ocean Territory", "IO", "IOT", "086", &["GBP", "USD"]),
    ("Brunei Darussalam", "BN", "BRN", "096", &["BND", "SGD"]),
    ("Bulgaria", "BG", "BGR", "100", &["BGN"]),
    ("Burkina Faso", "BF", "BFA", "854", &["XOF"]),
    ("Burundi", "BI", "BDI", "108", &["BIF"]),
    ("Cabo Verde", "CV", "CPV", "132", &["CVE"]),
    ("Cambodia", "KH", "KHM", "116", &["KHR"]),
    ("Cameroon", "CM", "CMR", "120", &["XAF"]),
    ("Canada", "CA", "CAN", "124", &["CAD"]),
    ("Cayman Islands", "KY", "CYM", "136", &["KYD"]),
    ("Central African Republic", "CF", "CAF", "140", &["XAF"]),
    ("Chad", "TD", "TCD", "148", &["XAF"]),
    ("Chile", "CL", "CHL", "152", &["CLP"]),
    ("China", "CN", "CHN", "156", &["CNY"]),
    ("Christmas Island", "CX", "CXR", "162", &["AUD"]),
    ("Cocos (Keeling) Islands", "CC", "CCK", "166", &["AUD"]),
    ("Colombia", "CO", "COL", "170", &["COP"]),
    ("Comoros", "KM", "COM", "174", &["KMF"]),
    ("Congo", "CG", "COG", "178", &["XAF"]),
    ("Congo, Democratic Republic of the", "CD", "COD", "180", &["CDF"]),
    ("Cook Islands", "CK", "COK", "184", &["NZD"]),
    ("Costa Rica", "CR", "CRI", "188", &["CRC"]),
    ("Côte d'Ivoire", "CI", "CIV", "384", &["XOF"]),
    ("Croatia", "HR", "HRV", "191", &["EUR"]),
    ("Cuba", "CU", "CUB", "192", &["CUP"]),
    ("Curaçao", "CW", "CUW", "531", &["ANG"]),
    ("Cyprus", "CY", "CYP", "196", &["EUR"]),
    ("Czechia", "CZ", "CZE", "203", &["CZK"]),
    ("Denmark", "DK", "DNK", "208", &["DKK"]),
    ("Djibouti", "DJ", "DJI", "262", &["DJF"]),
    ("Dominica", "DM", "DMA", "212", &["XCD"]),
    ("Dominican Republic", "DO", "DOM", "214", &["DOP"]),
    ("Ecuador", "EC", "ECU", "218", &["USD"]),
    ("Egypt", "EG", "EGY", "818", &["EGP"]),
    ("El Salvador", "SV", "SLV", "222", &["USD"]),
    ("Equatorial Guinea", "GQ", "GNQ", "226", &["XAF"]),
    ("Eritrea", "ER", "ERI", "232", &["ERN"]),
    ("Estonia", "EE", "EST", "233", &["EUR"]),
    ("Eswatini", "SZ", "SWZ", "748", &["SZL", "ZAR"]),
    ("Ethiopia", "ET", "ETH", "231", &["ETB"]),
    ("Falkland Islands (Malvinas)", "FK", "FLK", "238", &["FKP"]),
    ("Faroe Islands", "FO", "FRO", "234", &["DKK"]),
    ("Fiji", "FJ", "FJI", "242", &["FJD"]),
    ("Finland", "FI", "FIN", "246", &["EUR"]),
    ("France", "FR", "FRA", "250", &["EUR"]),
    ("French Guiana", "GF", "GUF", "254", &["EUR"]),
    ("French Polynesia", "PF", "PYF", "258", &["XPF"]),
    ("French Southern Territories", "TF", "ATF", "260", &["EUR"]),
    ("Gabon", "GA", "GAB", "266", &["XAF"]),
    ("Gambia", "GM", "GMB", "270", &["GMD"]),
    ("Georgia", "GE", "GEO", "268", &["GEL"]),
    ("Germany", "DE", "DEU", "276", &["EUR"]),
    ("Ghana", "GH", "GHA", "288", &["GHS"]),
    ("Gibraltar", "GI", "GIB", "292", &["GIP"]),
    ("Greece", "GR", "GRC", "300", &["EUR"]),
    ("Greenland", "GL", "GRL", "304", &["DKK"]),
    ("Grenada", "GD", "GRD", "308", &["XCD"]),
    ("Guadeloupe", "GP", "GLP", "312", &["EUR"]),
    ("Guam", "GU", "GUM", "316", &["USD"]),
    ("Guatemala", "GT", "GTM", "320", &["GTQ"]),
    ("Guernsey", "GG", "GGY", "831", &["GBP"]),
    ("Guinea", "GN", "GIN", "324", &["GNF"]),
    ("Guinea-Bissau", "GW", "GNB", "624", &["XOF"]),
    ("Guyana", "GY", "GUY", "328", &["GYD"]),
    ("Haiti", "HT", "HTI", "332", &["HTG", "USD"]),
    ("Heard Island and McDonald Islands", "HM", "HMD", "334", &["AUD"]),
    ("Holy See", "VA", "VAT", "336", &["EUR"]),
    ("Honduras", "HN", "HND", "340", &["HNL"]),
    ("Hong Kong", "HK", "HKG", "344", &["HKD"]),
    ("Hungary", "HU", "HUN", "348", &["HUF"]),
    ("Iceland", "IS", "ISL", "352", &["ISK"]),
    ("India", "IN", "IND", "356", &["INR"]),
    ("Indonesia", "ID", "IDN", "360", &["IDR"]),
    ("Iran (Islamic Republic of)", "IR", "IRN", "364", &["IRR"]),
    ("Iraq", "IQ", "IRQ", "368", &["IQD"]),
    ("Ireland", "IE", "IRL", "372", &["EUR"]),
    ("Isle of Man", "IM", "IMN", "833", &["GBP"]),
    ("Israel", "IL", "ISR", "376", &["ILS"]),
    ("Italy", "IT", "ITA", "380", &["EUR"]),
    ("Jamaica", "JM", "JAM", "388", &["JMD"]),
    ("Japan", "JP", "JPN", "392", &["JPY"]),
    ("Jersey", "JE", "JEY", "832", &["GBP"]),
    ("Jordan", "JO", "JOR", "400", &["JOD"]),
    ("Kazakhstan", "KZ", "KAZ", "398", &["KZT"]),
    ("Kenya", "KE", "KEN", "404", &["KES"]),
    ("Kiribati", "KI", "KIR", "296", &["AUD"]),
    ("Korea (Democratic People's Republic of)", "KP", "PRK", "408", &["KPW"]),
    ("Korea, Republic of", "KR", "KOR", "410", &["KRW"]),
    ("Kuwait", "KW", "KWT", "414", &["KWD"]),
    ("Kyrgyzstan", "KG", "KGZ", "417", &["KGS"]),
    ("Lao People's Democratic Republic", "LA", "LAO", "418", &["LAK"]),
    ("Latvia", "LV", "LVA", "428", &["EUR"]),
    ("Lebanon", "LB", "LBN", "422", &["LBP"]),
    ("Lesotho", "LS", "LSO", "426", &["LSL", "ZAR"]),
    ("Liberia", "LR", "LBR", "430", &["LRD"]),
    ("Libya", "LY", "LBY", "434", &["LYD"]),
    ("Liechtenstein", "LI", "LIE", "438", &["CHF"]),
    ("Lithuania", "LT", "LTU", "440", &["EUR"]),
    ("Luxembourg", "LU", "LUX", "442", &["EUR"]),
    ("Macao", "MO", "MAC", "446", &["MOP"]),
    ("Madagascar", "MG", "MDG", "450", &["MGA"]),
    ("Malawi", "MW", "MWI", "454", &["MWK"]),
    ("Malaysia", "MY", "MYS", "458", &["MYR"]),
    ("Maldives", "MV", "MDV", "462", &["MVR"]),
    ("Mali", "ML", "MLI", "466", &["XOF"]),
    ("Malta", "MT", "MLT", "470", &["EUR"]),
    ("Marshall Islands", "MH", "MHL", "584", &["USD"]),
    ("Martinique", "MQ", "MTQ", "474", &["EUR"]),
    ("Mauritania", "MR", "MRT", "478", &["MRU"]),
    ("Mauritius", "MU", "MUS", "480", &["MUR"]),
    ("Mayotte", "YT", "MYT", "175", &["EUR"]),
    ("Mexico", "MX", "MEX", "484", &["MXN"]),
    ("Micronesia (Federated States of)", "FM", "FSM", "583", &["USD"]),
    ("Moldova, Republic of", "MD", "MDA", "498", &["MDL"]),
    ("Monaco", "MC", "MCO", "492", &["EUR"]),
    ("Mongolia", "MN", "MNG", "496", &["MNT"]),
    ("Montenegro", "ME", "MNE", "499", &["EUR"]),
    ("Montserrat", "MS", "MSR", "500", &["XCD"]),
    ("Morocco", "MA", "MAR", "504", &["MAD"]),
    ("Mozambique", "MZ", "MOZ", "508", &["MZN"]),
    ("Myanmar", "MM", "MMR", "104", &["MMK"]),
    ("Namibia", "NA", "NAM", "516", &["NAD", "ZAR"]),
    ("Nauru", "NR", "NRU", "520", &["AUD"]),
    ("Nepal", "NP", "NPL", "524", &["NPR"]),
    ("Netherlands", "NL", "NLD", "528", &["EUR"]),
    ("New Caledonia", "NC", "NCL", "540", &["XPF"]),
    ("New Zealand", "NZ", "NZL", "554", &["NZD"]),
    ("Nicaragua", "NI", "NIC", "558", &["NIO"]),
    ("Niger", "NE", "NER", "562", &["XOF"]),
    ("Nigeria", "NG", "NGA", "566", &["NGN"]),
    ("Niue", "NU", "NIU", "570", &["NZD"]),
    ("Norfolk Island", "NF", "NFK", "574", &["AUD"]),
    ("North Macedonia", "MK", "MKD", "807", &["MKD"]),
    ("Northern Mariana Islands", "MP", "MNP", "580", &["USD"]),
    ("Norway", "NO", "NOR", "578", &["NOK"]),
    ("Oman", "OM", "OMN", "512", &["OMR"]),
    ("Pakistan", "PK", "PAK", "586", &["PKR"]),
    ("Palau", "PW", "PLW", "585", &["USD"]),
    ("Palestine, State of", "PS", "PSE", "275", &["ILS", "JOD"]),
    ("Panama", "PA", "PAN", "591", &["PAB", "USD"]),
    ("Papua New Guinea", "PG", "PNG", "598", &["PGK"]),
    ("Paraguay", "PY", "PRY", "600", &["PYG"]),
    ("Peru", "PE", "PER", "604", &["PEN"]),
    ("Philippines", "PH", "PHL", "608", &["PHP"]),
    ("Pitcairn", "PN", "PCN", "612", &["NZD"]),
    ("Poland", "PL", "POL", "616", &["PLN"]),
    ("Portugal", "PT", "PRT", "620", &["EUR"]),
    ("Puerto Rico", "PR", "PRI", "630", &["USD"]),
    ("Qatar", "QA", "QAT", "634", &["QAR"]),
    ("Réunion", "RE", "REU", "638", &["EUR"]),
    ("Romania", "RO", "ROU", "642", &["RON"]),
    ("Russian Federation", "RU", "RUS", "643", &["RUB"]),
    ("Rwanda", "RW", "RWA", "646", &["RWF"]),
    ("Saint Barthélemy", "BL", "BLM", "652", &["EUR"]),
    (
        "Saint Helena, Ascension and Tristan da Cunha",
        "SH",
        "SHN",
        "654",
        &["SHP"],
    ),
    ("Saint Kitts and Nevis", "KN", "KNA", "659", &["XCD"]),
    ("Saint Lucia", "LC", "LCA", "662", &["XCD"]),
    ("Saint Martin (French part)", "MF", "MAF", "663", &["EUR"]),
    ("Saint Pierre and Miquelon", "PM", "SPM", "666", &["EUR"]),
    ("Saint Vincent and the Grenadines", "VC", "VCT", "670", &["XCD"]),
    ("Samoa", "WS", "WSM", "882", &["WST"]),
    ("San Marino", "SM", "SMR", "674", &["EUR"]),
    ("Sao Tome and Principe", "ST", "STP", "678", &["STN"]),
    ("Saudi Arabia", "SA", "SAU", "682", &["SAR"]),
    ("Senegal", "SN", "SEN", "686", &["XOF"]),
    ("Serbia", "RS", "SRB", "688", &["RSD"]),
    ("Seychelles", "SC", "SYC", "690", &["SCR"]),
    ("Sierra Leone", "SL", "SLE", "694", &["SLE"]),
    ("Singapore", "SG", "SGP", "702", &["SGD"]),
    ("Sint Maarten (Dutch part)", "SX", "SXM", "534", &["ANG"]),
    ("Slovakia", "SK", "SVK", "703", &["EUR"]),
    ("Slovenia", "SI", "SVN", "705", &["EUR"]),
    ("Solomon Islands", "SB", "SLB", "090", &["SBD"]),
    ("Somalia", "SO", "SOM", "706", &["SOS"]),
    ("South Africa", "ZA", "ZAF", "710", &["ZAR"]),
    (
        "South Georgia and the South Sandwich Islands",
        "GS",
        "SGS",
        "239",
        &["GBP"],
    ),
    ("South Sudan", "SS", "SSD", "728", &["SSP"]),
    ("Spain", "ES", "ESP", "724", &["EUR"]),
    ("Sri Lanka", "LK", "LKA", "144", &["LKR"]),
    ("Sudan", "SD", "SDN", "729", &["SDG"]),
    ("Suriname", "SR", "SUR", "740", &["SRD"]),
    ("Svalbard and Jan Mayen", "SJ", "SJM", "744", &["NOK"]),
    ("Sweden", "SE", "SWE", "752", &["SEK"]),
    ("Switzerland", "CH", "CHE", "756", &["CHF"]),
    ("Syrian Arab Republic", "SY", "SYR", "760", &["SYP"]),
    ("Taiwan, Province of China", "TW", "TWN", "158", &["TWD"]),
    ("Tajikistan", "TJ", "TJK", "762", &["TJS"]),
    ("Tanzania, United Republic of", "TZ", "TZA", "834", &["TZS"]),
    ("Thailand", "TH", "THA", "764", &["THB"]),
    ("Timor-Leste", "TL", "TLS", "626", &["USD"]),
    ("Togo", "TG", "TGO", "768", &["XOF"]),
    ("Tokelau", "TK", "TKL", "772", &["NZD"]),
    ("Tonga", "TO", "TON", "776", &["TOP"]),
    ("Trinidad and Tobago", "TT", "TTO", "780", &["TTD"]),
    ("Tunisia", "TN", "TUN", "788", &["TND"]),
    ("Türkiye", "TR", "TUR", "792", &["TRY"]),
    ("Turkmenistan", "TM", "TKM", "795", &["TMT"]),
    ("Turks and Caicos Islands", "TC", "TCA", "796", &["USD"]),
    ("Tuvalu", "TV", "TUV", "798", &["AUD"]),
    ("Uganda", "UG", "UGA", "800", &["UGX"]),
    ("Ukraine", "UA", "UKR", "804", &["UAH"]),
    ("United Arab Emirates", "AE", "ARE", "784", &["AED"]),
    (
        "United Kingdom of Great Britain and Northern Ireland",
        "GB",
        "GBR",
        "826",
        &["GBP"],
    ),
    ("United States of America", "US", "USA", "840", &["USD"]),
    ("United States Minor Outlying Islands", "UM", "UMI", "581", &["USD"]),
    ("Uruguay", "UY", "URY", "858", &["UYU"]),
    ("Uzbekistan", "UZ", "UZB", "860", &["UZS"]),
    ("Vanuatu", "VU", "VUT", "548", &["VUV"]),
    ("Venezuela (Bolivarian Republic of)", "VE", "VEN", "862", &["VES"]),
    ("Viet Nam", "VN", "VNM", "704", &["VND"]),
    ("Virgin Islands (British)", "VG", "VGB", "092", &["USD"]),
    ("Virgin Islands (U.S.)", "VI", "VIR", "850", &["USD"]),
    ("Wallis and Futuna", "WF", "WLF", "876", &["XPF"]),
    ("Western Sahara", "EH", "ESH", "732", &["MAD"]),
    ("Yemen", "YE", "YEM", "887", &["YER"]),
    ("Zambia", "ZM", "ZMB", "894", &["ZMW"]),
    ("Zimbabwe", "ZW", "ZWE", "716", &["ZWL"]),
];

/// Materialize the compiled-in table as registry records.
///
/// Each record carries the three required keys plus `name` and `currency`
/// descriptive fields.
pub fn records() -> Vec<Record> {
    COUNTRIES
        .iter()
        .map(|&(name, alpha2, alpha3, numeric, currencies)| {
            Record::new(alpha2, alpha3, numeric)
                .with_field("name", name)
                .with_field("currency", currencies.to_vec())
        })
        .collect()
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    Registry::build(records()).expect("compiled-in ISO 3166-1 dataset is valid")
});

/// The process-wide registry over [`COUNTRIES`], built on first use.
///
/// Safe to share across threads: the registry is immutable once built and
/// `Lazy` guarantees publish-once initialization.
pub fn registry() -> &'static Registry {
    &REGISTRY
}
