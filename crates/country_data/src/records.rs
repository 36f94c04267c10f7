//! Builtin dial-code table, one row per country:
//! `(iso2, name, dial code, priority, area codes)`.
//!
//! Rows are ordered by display name. `priority` ranks countries that share
//! a dial code (0 = the plan's main country). Area codes are only listed
//! where the combined dial-code + area-code key stays within the four-digit
//! lookup cap; countries whose real area codes are longer (Guernsey, Isle
//! of Man, Jersey, Vatican City, ...) are ranked by priority alone.

pub(crate) type Raw = (
    &'static str,
    &'static str,
    &'static str,
    u8,
    &'static [&'static str],
);

const NONE: &[&str] = &[];

pub(crate) const RAW: &[Raw] = &[
    ("af", "Afghanistan", "93", 0, NONE),
    ("al", "Albania", "355", 0, NONE),
    ("dz", "Algeria", "213", 0, NONE),
    ("as", "American Samoa", "1", 4, &["684"]),
    ("ad", "Andorra", "376", 0, NONE),
    ("ao", "Angola", "244", 0, NONE),
    ("ai", "Anguilla", "1", 3, &["264"]),
    ("ag", "Antigua and Barbuda", "1", 2, &["268"]),
    ("ar", "Argentina", "54", 0, NONE),
    ("am", "Armenia", "374", 0, NONE),
    ("aw", "Aruba", "297", 0, NONE),
    ("ac", "Ascension Island", "247", 0, NONE),
    ("au", "Australia", "61", 0, NONE),
    ("at", "Austria", "43", 0, NONE),
    ("az", "Azerbaijan", "994", 0, NONE),
    ("bs", "Bahamas", "1", 7, &["242"]),
    ("bh", "Bahrain", "973", 0, NONE),
    ("bd", "Bangladesh", "880", 0, NONE),
    ("bb", "Barbados", "1", 5, &["246"]),
    ("by", "Belarus", "375", 0, NONE),
    ("be", "Belgium", "32", 0, NONE),
    ("bz", "Belize", "501", 0, NONE),
    ("bj", "Benin", "229", 0, NONE),
    ("bm", "Bermuda", "1", 6, &["441"]),
    ("bt", "Bhutan", "975", 0, NONE),
    ("bo", "Bolivia", "591", 0, NONE),
    ("ba", "Bosnia and Herzegovina", "387", 0, NONE),
    ("bw", "Botswana", "267", 0, NONE),
    ("br", "Brazil", "55", 0, NONE),
    ("io", "British Indian Ocean Territory", "246", 0, NONE),
    ("vg", "British Virgin Islands", "1", 23, &["284"]),
    ("bn", "Brunei", "673", 0, NONE),
    ("bg", "Bulgaria", "359", 0, NONE),
    ("bf", "Burkina Faso", "226", 0, NONE),
    ("bi", "Burundi", "257", 0, NONE),
    ("kh", "Cambodia", "855", 0, NONE),
    ("cm", "Cameroon", "237", 0, NONE),
    (
        "ca",
        "Canada",
        "1",
        1,
        &[
            "204", "226", "236", "249", "250", "263", "289", "306", "343", "354", "365", "367",
            "368", "382", "387", "403", "416", "418", "428", "431", "437", "438", "450", "468",
            "474", "506", "514", "519", "548", "579", "581", "584", "587", "600", "604", "613",
            "639", "647", "672", "683", "705", "709", "742", "753", "778", "780", "782", "807",
            "819", "825", "867", "873", "879", "902", "905",
        ],
    ),
    ("cv", "Cape Verde", "238", 0, NONE),
    ("bq", "Caribbean Netherlands", "599", 1, &["3", "4", "7"]),
    ("ky", "Cayman Islands", "1", 14, &["345"]),
    ("cf", "Central African Republic", "236", 0, NONE),
    ("td", "Chad", "235", 0, NONE),
    ("cl", "Chile", "56", 0, NONE),
    ("cn", "China", "86", 0, NONE),
    ("cx", "Christmas Island", "61", 1, NONE),
    ("cc", "Cocos (Keeling) Islands", "61", 2, NONE),
    ("co", "Colombia", "57", 0, NONE),
    ("km", "Comoros", "269", 0, NONE),
    ("cd", "Congo (DRC)", "243", 0, NONE),
    ("cg", "Congo (Republic)", "242", 0, NONE),
    ("ck", "Cook Islands", "682", 0, NONE),
    ("cr", "Costa Rica", "506", 0, NONE),
    ("ci", "Côte d'Ivoire", "225", 0, NONE),
    ("hr", "Croatia", "385", 0, NONE),
    ("cu", "Cuba", "53", 0, NONE),
    ("cw", "Curaçao", "599", 0, NONE),
    ("cy", "Cyprus", "357", 0, NONE),
    ("cz", "Czech Republic", "420", 0, NONE),
    ("dk", "Denmark", "45", 0, NONE),
    ("dj", "Djibouti", "253", 0, NONE),
    ("dm", "Dominica", "1", 8, &["767"]),
    ("do", "Dominican Republic", "1", 9, &["809", "829", "849"]),
    ("ec", "Ecuador", "593", 0, NONE),
    ("eg", "Egypt", "20", 0, NONE),
    ("sv", "El Salvador", "503", 0, NONE),
    ("gq", "Equatorial Guinea", "240", 0, NONE),
    ("er", "Eritrea", "291", 0, NONE),
    ("ee", "Estonia", "372", 0, NONE),
    ("sz", "Eswatini", "268", 0, NONE),
    ("et", "Ethiopia", "251", 0, NONE),
    ("fk", "Falkland Islands", "500", 0, NONE),
    ("fo", "Faroe Islands", "298", 0, NONE),
    ("fj", "Fiji", "679", 0, NONE),
    ("fi", "Finland", "358", 0, NONE),
    ("fr", "France", "33", 0, NONE),
    ("gf", "French Guiana", "594", 0, NONE),
    ("pf", "French Polynesia", "689", 0, NONE),
    ("ga", "Gabon", "241", 0, NONE),
    ("gm", "Gambia", "220", 0, NONE),
    ("ge", "Georgia", "995", 0, NONE),
    ("de", "Germany", "49", 0, NONE),
    ("gh", "Ghana", "233", 0, NONE),
    ("gi", "Gibraltar", "350", 0, NONE),
    ("gr", "Greece", "30", 0, NONE),
    ("gl", "Greenland", "299", 0, NONE),
    ("gd", "Grenada", "1", 10, &["473"]),
    ("gp", "Guadeloupe", "590", 0, NONE),
    ("gu", "Guam", "1", 11, &["671"]),
    ("gt", "Guatemala", "502", 0, NONE),
    ("gg", "Guernsey", "44", 1, NONE),
    ("gn", "Guinea", "224", 0, NONE),
    ("gw", "Guinea-Bissau", "245", 0, NONE),
    ("gy", "Guyana", "592", 0, NONE),
    ("ht", "Haiti", "509", 0, NONE),
    ("hn", "Honduras", "504", 0, NONE),
    ("hk", "Hong Kong", "852", 0, NONE),
    ("hu", "Hungary", "36", 0, NONE),
    ("is", "Iceland", "354", 0, NONE),
    ("in", "India", "91", 0, NONE),
    ("id", "Indonesia", "62", 0, NONE),
    ("ir", "Iran", "98", 0, NONE),
    ("iq", "Iraq", "964", 0, NONE),
    ("ie", "Ireland", "353", 0, NONE),
    ("im", "Isle of Man", "44", 2, NONE),
    ("il", "Israel", "972", 0, NONE),
    ("it", "Italy", "39", 0, NONE),
    ("jm", "Jamaica", "1", 12, &["876", "658"]),
    ("jp", "Japan", "81", 0, NONE),
    ("je", "Jersey", "44", 3, NONE),
    ("jo", "Jordan", "962", 0, NONE),
    ("kz", "Kazakhstan", "7", 1, &["33", "7"]),
    ("ke", "Kenya", "254", 0, NONE),
    ("ki", "Kiribati", "686", 0, NONE),
    ("xk", "Kosovo", "383", 0, NONE),
    ("kw", "Kuwait", "965", 0, NONE),
    ("kg", "Kyrgyzstan", "996", 0, NONE),
    ("la", "Laos", "856", 0, NONE),
    ("lv", "Latvia", "371", 0, NONE),
    ("lb", "Lebanon", "961", 0, NONE),
    ("ls", "Lesotho", "266", 0, NONE),
    ("lr", "Liberia", "231", 0, NONE),
    ("ly", "Libya", "218", 0, NONE),
    ("li", "Liechtenstein", "423", 0, NONE),
    ("lt", "Lithuania", "370", 0, NONE),
    ("lu", "Luxembourg", "352", 0, NONE),
    ("mo", "Macau", "853", 0, NONE),
    ("mg", "Madagascar", "261", 0, NONE),
    ("mw", "Malawi", "265", 0, NONE),
    ("my", "Malaysia", "60", 0, NONE),
    ("mv", "Maldives", "960", 0, NONE),
    ("ml", "Mali", "223", 0, NONE),
    ("mt", "Malta", "356", 0, NONE),
    ("mh", "Marshall Islands", "692", 0, NONE),
    ("mq", "Martinique", "596", 0, NONE),
    ("mr", "Mauritania", "222", 0, NONE),
    ("mu", "Mauritius", "230", 0, NONE),
    ("yt", "Mayotte", "262", 1, NONE),
    ("mx", "Mexico", "52", 0, NONE),
    ("fm", "Micronesia", "691", 0, NONE),
    ("md", "Moldova", "373", 0, NONE),
    ("mc", "Monaco", "377", 0, NONE),
    ("mn", "Mongolia", "976", 0, NONE),
    ("me", "Montenegro", "382", 0, NONE),
    ("ms", "Montserrat", "1", 17, &["664"]),
    ("ma", "Morocco", "212", 0, NONE),
    ("mz", "Mozambique", "258", 0, NONE),
    ("mm", "Myanmar", "95", 0, NONE),
    ("na", "Namibia", "264", 0, NONE),
    ("nr", "Nauru", "674", 0, NONE),
    ("np", "Nepal", "977", 0, NONE),
    ("nl", "Netherlands", "31", 0, NONE),
    ("nc", "New Caledonia", "687", 0, NONE),
    ("nz", "New Zealand", "64", 0, NONE),
    ("ni", "Nicaragua", "505", 0, NONE),
    ("ne", "Niger", "227", 0, NONE),
    ("ng", "Nigeria", "234", 0, NONE),
    ("nu", "Niue", "683", 0, NONE),
    ("nf", "Norfolk Island", "672", 0, NONE),
    ("kp", "North Korea", "850", 0, NONE),
    ("mk", "North Macedonia", "389", 0, NONE),
    ("mp", "Northern Mariana Islands", "1", 16, &["670"]),
    ("no", "Norway", "47", 0, NONE),
    ("om", "Oman", "968", 0, NONE),
    ("pk", "Pakistan", "92", 0, NONE),
    ("pw", "Palau", "680", 0, NONE),
    ("ps", "Palestine", "970", 0, NONE),
    ("pa", "Panama", "507", 0, NONE),
    ("pg", "Papua New Guinea", "675", 0, NONE),
    ("py", "Paraguay", "595", 0, NONE),
    ("pe", "Peru", "51", 0, NONE),
    ("ph", "Philippines", "63", 0, NONE),
    ("pl", "Poland", "48", 0, NONE),
    ("pt", "Portugal", "351", 0, NONE),
    ("pr", "Puerto Rico", "1", 18, &["787", "939"]),
    ("qa", "Qatar", "974", 0, NONE),
    ("re", "Réunion", "262", 0, NONE),
    ("ro", "Romania", "40", 0, NONE),
    ("ru", "Russia", "7", 0, NONE),
    ("rw", "Rwanda", "250", 0, NONE),
    ("bl", "Saint Barthélemy", "590", 1, NONE),
    ("sh", "Saint Helena", "290", 0, NONE),
    ("kn", "Saint Kitts and Nevis", "1", 13, &["869"]),
    ("lc", "Saint Lucia", "1", 15, &["758"]),
    ("mf", "Saint Martin", "590", 2, NONE),
    ("pm", "Saint Pierre and Miquelon", "508", 0, NONE),
    ("vc", "Saint Vincent and the Grenadines", "1", 22, &["784"]),
    ("ws", "Samoa", "685", 0, NONE),
    ("sm", "San Marino", "378", 0, NONE),
    ("st", "São Tomé and Príncipe", "239", 0, NONE),
    ("sa", "Saudi Arabia", "966", 0, NONE),
    ("sn", "Senegal", "221", 0, NONE),
    ("rs", "Serbia", "381", 0, NONE),
    ("sc", "Seychelles", "248", 0, NONE),
    ("sl", "Sierra Leone", "232", 0, NONE),
    ("sg", "Singapore", "65", 0, NONE),
    ("sx", "Sint Maarten", "1", 19, &["721"]),
    ("sk", "Slovakia", "421", 0, NONE),
    ("si", "Slovenia", "386", 0, NONE),
    ("sb", "Solomon Islands", "677", 0, NONE),
    ("so", "Somalia", "252", 0, NONE),
    ("za", "South Africa", "27", 0, NONE),
    ("kr", "South Korea", "82", 0, NONE),
    ("ss", "South Sudan", "211", 0, NONE),
    ("es", "Spain", "34", 0, NONE),
    ("lk", "Sri Lanka", "94", 0, NONE),
    ("sd", "Sudan", "249", 0, NONE),
    ("sr", "Suriname", "597", 0, NONE),
    ("sj", "Svalbard and Jan Mayen", "47", 1, &["79"]),
    ("se", "Sweden", "46", 0, NONE),
    ("ch", "Switzerland", "41", 0, NONE),
    ("sy", "Syria", "963", 0, NONE),
    ("tw", "Taiwan", "886", 0, NONE),
    ("tj", "Tajikistan", "992", 0, NONE),
    ("tz", "Tanzania", "255", 0, NONE),
    ("th", "Thailand", "66", 0, NONE),
    ("tl", "Timor-Leste", "670", 0, NONE),
    ("tg", "Togo", "228", 0, NONE),
    ("tk", "Tokelau", "690", 0, NONE),
    ("to", "Tonga", "676", 0, NONE),
    ("tt", "Trinidad and Tobago", "1", 21, &["868"]),
    ("tn", "Tunisia", "216", 0, NONE),
    ("tr", "Turkey", "90", 0, NONE),
    ("tm", "Turkmenistan", "993", 0, NONE),
    ("tc", "Turks and Caicos Islands", "1", 20, &["649"]),
    ("tv", "Tuvalu", "688", 0, NONE),
    ("vi", "US Virgin Islands", "1", 24, &["340"]),
    ("ug", "Uganda", "256", 0, NONE),
    ("ua", "Ukraine", "380", 0, NONE),
    ("ae", "United Arab Emirates", "971", 0, NONE),
    ("gb", "United Kingdom", "44", 0, NONE),
    ("us", "United States", "1", 0, NONE),
    ("uy", "Uruguay", "598", 0, NONE),
    ("uz", "Uzbekistan", "998", 0, NONE),
    ("vu", "Vanuatu", "678", 0, NONE),
    ("va", "Vatican City", "39", 1, NONE),
    ("ve", "Venezuela", "58", 0, NONE),
    ("vn", "Vietnam", "84", 0, NONE),
    ("wf", "Wallis and Futuna", "681", 0, NONE),
    ("eh", "Western Sahara", "212", 1, NONE),
    ("ye", "Yemen", "967", 0, NONE),
    ("zm", "Zambia", "260", 0, NONE),
    ("zw", "Zimbabwe", "263", 0, NONE),
    ("ax", "Åland Islands", "358", 1, NONE),
];
