//! ISO 3166-1 country table, current edition.
//!
//! Only currently assigned entries are carried; withdrawn or transitionally
//! reserved codes are deliberately absent, so lookups for them miss.

/// One assigned ISO 3166-1 entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryEntry {
    pub name: &'static str,
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    /// Zero-padded three-digit numeric code.
    pub numeric: &'static str,
}

const fn entry(
    name: &'static str,
    alpha2: &'static str,
    alpha3: &'static str,
    numeric: &'static str,
) -> CountryEntry {
    CountryEntry {
        name,
        alpha2,
        alpha3,
        numeric,
    }
}

/// All assigned entries, ordered by alpha-2 code.
pub const COUNTRIES: &[CountryEntry] = &[
    entry("Andorra", "AD", "AND", "020"),
    entry("United Arab Emirates", "AE", "ARE", "784"),
    entry("Afghanistan", "AF", "AFG", "004"),
    entry("Antigua and Barbuda", "AG", "ATG", "028"),
    entry("Anguilla", "AI", "AIA", "660"),
    entry("Albania", "AL", "ALB", "008"),
    entry("Armenia", "AM", "ARM", "051"),
    entry("Angola", "AO", "AGO", "024"),
    entry("Antarctica", "AQ", "ATA", "010"),
    entry("Argentina", "AR", "ARG", "032"),
    entry("American Samoa", "AS", "ASM", "016"),
    entry("Austria", "AT", "AUT", "040"),
    entry("Australia", "AU", "AUS", "036"),
    entry("Aruba", "AW", "ABW", "533"),
    entry("Aland Islands", "AX", "ALA", "248"),
    entry("Azerbaijan", "AZ", "AZE", "031"),
    entry("Bosnia and Herzegovina", "BA", "BIH", "070"),
    entry("Barbados", "BB", "BRB", "052"),
    entry("Bangladesh", "BD", "BGD", "050"),
    entry("Belgium", "BE", "BEL", "056"),
    entry("Burkina Faso", "BF", "BFA", "854"),
    entry("Bulgaria", "BG", "BGR", "100"),
    entry("Bahrain", "BH", "BHR", "048"),
    entry("Burundi", "BI", "BDI", "108"),
    entry("Benin", "BJ", "BEN", "204"),
    entry("Saint Barthelemy", "BL", "BLM", "652"),
    entry("Bermuda", "BM", "BMU", "060"),
    entry("Brunei Darussalam", "BN", "BRN", "096"),
    entry("Bolivia", "BO", "BOL", "068"),
    entry("Bonaire, Sint Eustatius and Saba", "BQ", "BES", "535"),
    entry("Brazil", "BR", "BRA", "076"),
    entry("Bahamas", "BS", "BHS", "044"),
    entry("Bhutan", "BT", "BTN", "064"),
    entry("Bouvet Island", "BV", "BVT", "074"),
    entry("Botswana", "BW", "BWA", "072"),
    entry("Belarus", "BY", "BLR", "112"),
    entry("Belize", "BZ", "BLZ", "084"),
    entry("Canada", "CA", "CAN", "124"),
    entry("Cocos (Keeling) Islands", "CC", "CCK", "166"),
    entry("Congo, Democratic Republic of the", "CD", "COD", "180"),
    entry("Central African Republic", "CF", "CAF", "140"),
    entry("Congo", "CG", "COG", "178"),
    entry("Switzerland", "CH", "CHE", "756"),
    entry("Cote d'Ivoire", "CI", "CIV", "384"),
    entry("Cook Islands", "CK", "COK", "184"),
    entry("Chile", "CL", "CHL", "152"),
    entry("Cameroon", "CM", "CMR", "120"),
    entry("China", "CN", "CHN", "156"),
    entry("Colombia", "CO", "COL", "170"),
    entry("Costa Rica", "CR", "CRI", "188"),
    entry("Cuba", "CU", "CUB", "192"),
    entry("Cabo Verde", "CV", "CPV", "132"),
    entry("Curacao", "CW", "CUW", "531"),
    entry("Christmas Island", "CX", "CXR", "162"),
    entry("Cyprus", "CY", "CYP", "196"),
    entry("Czechia", "CZ", "CZE", "203"),
    entry("Germany", "DE", "DEU", "276"),
    entry("Djibouti", "DJ", "DJI", "262"),
    entry("Denmark", "DK", "DNK", "208"),
    entry("Dominica", "DM", "DMA", "212"),
    entry("Dominican Republic", "DO", "DOM", "214"),
    entry("Algeria", "DZ", "DZA", "012"),
    entry("Ecuador", "EC", "ECU", "218"),
    entry("Estonia", "EE", "EST", "233"),
    entry("Egypt", "EG", "EGY", "818"),
    entry("Western Sahara", "EH", "ESH", "732"),
    entry("Eritrea", "ER", "ERI", "232"),
    entry("Spain", "ES", "ESP", "724"),
    entry("Ethiopia", "ET", "ETH", "231"),
    entry("Finland", "FI", "FIN", "246"),
    entry("Fiji", "FJ", "FJI", "242"),
    entry("Falkland Islands (Malvinas)", "FK", "FLK", "238"),
    entry("Micronesia, Federated States of", "FM", "FSM", "583"),
    entry("Faroe Islands", "FO", "FRO", "234"),
    entry("France", "FR", "FRA", "250"),
    entry("Gabon", "GA", "GAB", "266"),
    entry("United Kingdom", "GB", "GBR", "826"),
    entry("Grenada", "GD", "GRD", "308"),
    entry("Georgia", "GE", "GEO", "268"),
    entry("French Guiana", "GF", "GUF", "254"),
    entry("Guernsey", "GG", "GGY", "831"),
    entry("Ghana", "GH", "GHA", "288"),
    entry("Gibraltar", "GI", "GIB", "292"),
    entry("Greenland", "GL", "GRL", "304"),
    entry("Gambia", "GM", "GMB", "270"),
    entry("Guinea", "GN", "GIN", "324"),
    entry("Guadeloupe", "GP", "GLP", "312"),
    entry("Equatorial Guinea", "GQ", "GNQ", "226"),
    entry("Greece", "GR", "GRC", "300"),
    entry("South Georgia and the South Sandwich Islands", "GS", "SGS", "239"),
    entry("Guatemala", "GT", "GTM", "320"),
    entry("Guam", "GU", "GUM", "316"),
    entry("Guinea-Bissau", "GW", "GNB", "624"),
    entry("Guyana", "GY", "GUY", "328"),
    entry("Hong Kong", "HK", "HKG", "344"),
    entry("Heard Island and McDonald Islands", "HM", "HMD", "334"),
    entry("Honduras", "HN", "HND", "340"),
    entry("Croatia", "HR", "HRV", "191"),
    entry("Haiti", "HT", "HTI", "332"),
    entry("Hungary", "HU", "HUN", "348"),
    entry("Indonesia", "ID", "IDN", "360"),
    entry("Ireland", "IE", "IRL", "372"),
    entry("Israel", "IL", "ISR", "376"),
    entry("Isle of Man", "IM", "IMN", "833"),
    entry("India", "IN", "IND", "356"),
    entry("British Indian Ocean Territory", "IO", "IOT", "086"),
    entry("Iraq", "IQ", "IRQ", "368"),
    entry("Iran, Islamic Republic of", "IR", "IRN", "364"),
    entry("Iceland", "IS", "ISL", "352"),
    entry("Italy", "IT", "ITA", "380"),
    entry("Jersey", "JE", "JEY", "832"),
    entry("Jamaica", "JM", "JAM", "388"),
    entry("Jordan", "JO", "JOR", "400"),
    entry("Japan", "JP", "JPN", "392"),
    entry("Kenya", "KE", "KEN", "404"),
    entry("Kyrgyzstan", "KG", "KGZ", "417"),
    entry("Cambodia", "KH", "KHM", "116"),
    entry("Kiribati", "KI", "KIR", "296"),
    entry("Comoros", "KM", "COM", "174"),
    entry("Saint Kitts and Nevis", "KN", "KNA", "659"),
    entry("Korea, Democratic People's Republic of", "KP", "PRK", "408"),
    entry("Korea, Republic of", "KR", "KOR", "410"),
    entry("Kuwait", "KW", "KWT", "414"),
    entry("Cayman Islands", "KY", "CYM", "136"),
    entry("Kazakhstan", "KZ", "KAZ", "398"),
    entry("Lao People's Democratic Republic", "LA", "LAO", "418"),
    entry("Lebanon", "LB", "LBN", "422"),
    entry("Saint Lucia", "LC", "LCA", "662"),
    entry("Liechtenstein", "LI", "LIE", "438"),
    entry("Sri Lanka", "LK", "LKA", "144"),
    entry("Liberia", "LR", "LBR", "430"),
    entry("Lesotho", "LS", "LSO", "426"),
    entry("Lithuania", "LT", "LTU", "440"),
    entry("Luxembourg", "LU", "LUX", "442"),
    entry("Latvia", "LV", "LVA", "428"),
    entry("Libya", "LY", "LBY", "434"),
    entry("Morocco", "MA", "MAR", "504"),
    entry("Monaco", "MC", "MCO", "492"),
    entry("Moldova, Republic of", "MD", "MDA", "498"),
    entry("Montenegro", "ME", "MNE", "499"),
    entry("Saint Martin (French part)", "MF", "MAF", "663"),
    entry("Madagascar", "MG", "MDG", "450"),
    entry("Marshall Islands", "MH", "MHL", "584"),
    entry("North Macedonia", "MK", "MKD", "807"),
    entry("Mali", "ML", "MLI", "466"),
    entry("Myanmar", "MM", "MMR", "104"),
    entry("Mongolia", "MN", "MNG", "496"),
    entry("Macao", "MO", "MAC", "446"),
    entry("Northern Mariana Islands", "MP", "MNP", "580"),
    entry("Martinique", "MQ", "MTQ", "474"),
    entry("Mauritania", "MR", "MRT", "478"),
    entry("Montserrat", "MS", "MSR", "500"),
    entry("Malta", "MT", "MLT", "470"),
    entry("Mauritius", "MU", "MUS", "480"),
    entry("Maldives", "MV", "MDV", "462"),
    entry("Malawi", "MW", "MWI", "454"),
    entry("Mexico", "MX", "MEX", "484"),
    entry("Malaysia", "MY", "MYS", "458"),
    entry("Mozambique", "MZ", "MOZ", "508"),
    entry("Namibia", "NA", "NAM", "516"),
    entry("New Caledonia", "NC", "NCL", "540"),
    entry("Niger", "NE", "NER", "562"),
    entry("Norfolk Island", "NF", "NFK", "574"),
    entry("Nigeria", "NG", "NGA", "566"),
    entry("Nicaragua", "NI", "NIC", "558"),
    entry("Netherlands", "NL", "NLD", "528"),
    entry("Norway", "NO", "NOR", "578"),
    entry("Nepal", "NP", "NPL", "524"),
    entry("Nauru", "NR", "NRU", "520"),
    entry("Niue", "NU", "NIU", "570"),
    entry("New Zealand", "NZ", "NZL", "554"),
    entry("Oman", "OM", "OMN", "512"),
    entry("Panama", "PA", "PAN", "591"),
    entry("Peru", "PE", "PER", "604"),
    entry("French Polynesia", "PF", "PYF", "258"),
    entry("Papua New Guinea", "PG", "PNG", "598"),
    entry("Philippines", "PH", "PHL", "608"),
    entry("Pakistan", "PK", "PAK", "586"),
    entry("Poland", "PL", "POL", "616"),
    entry("Saint Pierre and Miquelon", "PM", "SPM", "666"),
    entry("Pitcairn", "PN", "PCN", "612"),
    entry("Puerto Rico", "PR", "PRI", "630"),
    entry("Palestine, State of", "PS", "PSE", "275"),
    entry("Portugal", "PT", "PRT", "620"),
    entry("Palau", "PW", "PLW", "585"),
    entry("Paraguay", "PY", "PRY", "600"),
    entry("Qatar", "QA", "QAT", "634"),
    entry("Reunion", "RE", "REU", "638"),
    entry("Romania", "RO", "ROU", "642"),
    entry("Serbia", "RS", "SRB", "688"),
    entry("Russian Federation", "RU", "RUS", "643"),
    entry("Rwanda", "RW", "RWA", "646"),
    entry("Saudi Arabia", "SA", "SAU", "682"),
    entry("Solomon Islands", "SB", "SLB", "090"),
    entry("Seychelles", "SC", "SYC", "690"),
    entry("Sudan", "SD", "SDN", "729"),
    entry("Sweden", "SE", "SWE", "752"),
    entry("Singapore", "SG", "SGP", "702"),
    entry("Saint Helena, Ascension and Tristan da Cunha", "SH", "SHN", "654"),
    entry("Slovenia", "SI", "SVN", "705"),
    entry("Svalbard and Jan Mayen", "SJ", "SJM", "744"),
    entry("Slovakia", "SK", "SVK", "703"),
    entry("Sierra Leone", "SL", "SLE", "694"),
    entry("San Marino", "SM", "SMR", "674"),
    entry("Senegal", "SN", "SEN", "686"),
    entry("Somalia", "SO", "SOM", "706"),
    entry("Suriname", "SR", "SUR", "740"),
    entry("South Sudan", "SS", "SSD", "728"),
    entry("Sao Tome and Principe", "ST", "STP", "678"),
    entry("El Salvador", "SV", "SLV", "222"),
    entry("Sint Maarten (Dutch part)", "SX", "SXM", "534"),
    entry("Syrian Arab Republic", "SY", "SYR", "760"),
    entry("Eswatini", "SZ", "SWZ", "748"),
    entry("Turks and Caicos Islands", "TC", "TCA", "796"),
    entry("Chad", "TD", "TCD", "148"),
    entry("French Southern Territories", "TF", "ATF", "260"),
    entry("Togo", "TG", "TGO", "768"),
    entry("Thailand", "TH", "THA", "764"),
    entry("Tajikistan", "TJ", "TJK", "762"),
    entry("Tokelau", "TK", "TKL", "772"),
    entry("Timor-Leste", "TL", "TLS", "626"),
    entry("Turkmenistan", "TM", "TKM", "795"),
    entry("Tunisia", "TN", "TUN", "788"),
    entry("Tonga", "TO", "TON", "776"),
    entry("Turkiye", "TR", "TUR", "792"),
    entry("Trinidad and Tobago", "TT", "TTO", "780"),
    entry("Tuvalu", "TV", "TUV", "798"),
    entry("Taiwan, Province of China", "TW", "TWN", "158"),
    entry("Tanzania, United Republic of", "TZ", "TZA", "834"),
    entry("Ukraine", "UA", "UKR", "804"),
    entry("Uganda", "UG", "UGA", "800"),
    entry("United States Minor Outlying Islands", "UM", "UMI", "581"),
    entry("United States of America", "US", "USA", "840"),
    entry("Uruguay", "UY", "URY", "858"),
    entry("Uzbekistan", "UZ", "UZB", "860"),
    entry("Holy See", "VA", "VAT", "336"),
    entry("Saint Vincent and the Grenadines", "VC", "VCT", "670"),
    entry("Venezuela, Bolivarian Republic of", "VE", "VEN", "862"),
    entry("Virgin Islands, British", "VG", "VGB", "092"),
    entry("Virgin Islands, U.S.", "VI", "VIR", "850"),
    entry("Viet Nam", "VN", "VNM", "704"),
    entry("Vanuatu", "VU", "VUT", "548"),
    entry("Wallis and Futuna", "WF", "WLF", "876"),
    entry("Samoa", "WS", "WSM", "882"),
    entry("Yemen", "YE", "YEM", "887"),
    entry("Mayotte", "YT", "MYT", "175"),
    entry("South Africa", "ZA", "ZAF", "710"),
    entry("Zambia", "ZM", "ZMB", "894"),
    entry("Zimbabwe", "ZW", "ZWE", "716"),
];
