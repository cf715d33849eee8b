/// The IBAN country registry: a closed set of supported countries.
///
/// Every country that issues IBANs under the SWIFT registry is a variant of
/// [`Country`]. Each carries its two-letter code, the exact total length of
/// its IBANs, and the [`FormatMask`] used for display. The table is static
/// and read-only; lookups never allocate or perform I/O.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::UnknownCountryCode;
use crate::format::FormatMask;

/// Display grouping for Seychelles, which does not group by four.
const SEYCHELLES_MASK: &[usize] = &[4, 4, 2, 2, 4, 4, 4, 4, 3];

/// A country participating in the IBAN registry.
///
/// The set is closed: matching on a `Country` is total, and a code outside
/// the registry has no `Country` at all (see [`Country::from_code`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Country {
    /// Andorra (`AD`, 24 characters).
    Andorra,
    /// United Arab Emirates (`AE`, 23 characters).
    UnitedArabEmirates,
    /// Albania (`AL`, 28 characters).
    Albania,
    /// Austria (`AT`, 20 characters).
    Austria,
    /// Azerbaijan (`AZ`, 28 characters).
    Azerbaijan,
    /// Bosnia and Herzegovina (`BA`, 20 characters).
    BosniaAndHerzegovina,
    /// Belgium (`BE`, 16 characters).
    Belgium,
    /// Bulgaria (`BG`, 22 characters).
    Bulgaria,
    /// Bahrain (`BH`, 22 characters).
    Bahrain,
    /// Burundi (`BI`, 27 characters).
    Burundi,
    /// Brazil (`BR`, 29 characters).
    Brazil,
    /// Belarus (`BY`, 28 characters).
    Belarus,
    /// Switzerland (`CH`, 21 characters).
    Switzerland,
    /// Costa Rica (`CR`, 22 characters).
    CostaRica,
    /// Cyprus (`CY`, 28 characters).
    Cyprus,
    /// Czechia (`CZ`, 24 characters).
    Czechia,
    /// Germany (`DE`, 22 characters).
    Germany,
    /// Djibouti (`DJ`, 27 characters).
    Djibouti,
    /// Denmark (`DK`, 18 characters).
    Denmark,
    /// Dominican Republic (`DO`, 28 characters).
    DominicanRepublic,
    /// Estonia (`EE`, 20 characters).
    Estonia,
    /// Egypt (`EG`, 29 characters).
    Egypt,
    /// Spain (`ES`, 24 characters).
    Spain,
    /// Finland (`FI`, 18 characters).
    Finland,
    /// Falkland Islands (`FK`, 18 characters).
    FalklandIslands,
    /// Faroe Islands (`FO`, 18 characters).
    FaroeIslands,
    /// France (`FR`, 27 characters).
    France,
    /// United Kingdom (`GB`, 22 characters).
    UnitedKingdom,
    /// Georgia (`GE`, 22 characters).
    Georgia,
    /// Gibraltar (`GI`, 23 characters).
    Gibraltar,
    /// Greenland (`GL`, 18 characters).
    Greenland,
    /// Greece (`GR`, 27 characters).
    Greece,
    /// Guatemala (`GT`, 28 characters).
    Guatemala,
    /// Croatia (`HR`, 21 characters).
    Croatia,
    /// Hungary (`HU`, 28 characters).
    Hungary,
    /// Ireland (`IE`, 22 characters).
    Ireland,
    /// Israel (`IL`, 23 characters).
    Israel,
    /// Iraq (`IQ`, 23 characters).
    Iraq,
    /// Iceland (`IS`, 26 characters).
    Iceland,
    /// Italy (`IT`, 27 characters).
    Italy,
    /// Jordan (`JO`, 30 characters).
    Jordan,
    /// Kuwait (`KW`, 30 characters).
    Kuwait,
    /// Kazakhstan (`KZ`, 20 characters).
    Kazakhstan,
    /// Lebanon (`LB`, 28 characters).
    Lebanon,
    /// Saint Lucia (`LC`, 32 characters).
    SaintLucia,
    /// Liechtenstein (`LI`, 21 characters).
    Liechtenstein,
    /// Lithuania (`LT`, 20 characters).
    Lithuania,
    /// Luxembourg (`LU`, 20 characters).
    Luxembourg,
    /// Latvia (`LV`, 21 characters).
    Latvia,
    /// Libya (`LY`, 25 characters).
    Libya,
    /// Monaco (`MC`, 27 characters).
    Monaco,
    /// Moldova (`MD`, 24 characters).
    Moldova,
    /// Montenegro (`ME`, 22 characters).
    Montenegro,
    /// North Macedonia (`MK`, 19 characters).
    NorthMacedonia,
    /// Mongolia (`MN`, 20 characters).
    Mongolia,
    /// Mauritania (`MR`, 27 characters).
    Mauritania,
    /// Malta (`MT`, 31 characters).
    Malta,
    /// Mauritius (`MU`, 30 characters).
    Mauritius,
    /// Netherlands (`NL`, 18 characters).
    Netherlands,
    /// Norway (`NO`, 15 characters).
    Norway,
    /// Oman (`OM`, 23 characters).
    Oman,
    /// Pakistan (`PK`, 24 characters).
    Pakistan,
    /// Poland (`PL`, 28 characters).
    Poland,
    /// Palestine (`PS`, 29 characters).
    Palestine,
    /// Portugal (`PT`, 25 characters).
    Portugal,
    /// Qatar (`QA`, 29 characters).
    Qatar,
    /// Romania (`RO`, 24 characters).
    Romania,
    /// Serbia (`RS`, 22 characters).
    Serbia,
    /// Russia (`RU`, 33 characters).
    Russia,
    /// Saudi Arabia (`SA`, 24 characters).
    SaudiArabia,
    /// Seychelles (`SC`, 31 characters).
    Seychelles,
    /// Sudan (`SD`, 18 characters).
    Sudan,
    /// Sweden (`SE`, 24 characters).
    Sweden,
    /// Slovenia (`SI`, 19 characters).
    Slovenia,
    /// Slovakia (`SK`, 24 characters).
    Slovakia,
    /// San Marino (`SM`, 27 characters).
    SanMarino,
    /// Somalia (`SO`, 23 characters).
    Somalia,
    /// Sao Tome and Principe (`ST`, 25 characters).
    SaoTomeAndPrincipe,
    /// El Salvador (`SV`, 28 characters).
    ElSalvador,
    /// Timor-Leste (`TL`, 23 characters).
    TimorLeste,
    /// Tunisia (`TN`, 24 characters).
    Tunisia,
    /// Turkey (`TR`, 26 characters).
    Turkey,
    /// Ukraine (`UA`, 29 characters).
    Ukraine,
    /// Vatican City (`VA`, 22 characters).
    VaticanCity,
    /// British Virgin Islands (`VG`, 24 characters).
    BritishVirginIslands,
    /// Kosovo (`XK`, 20 characters).
    Kosovo,
}

impl Country {
    /// Every registry country, ordered by code.
    pub const ALL: &'static [Country] = &[
        Self::Andorra,
        Self::UnitedArabEmirates,
        Self::Albania,
        Self::Austria,
        Self::Azerbaijan,
        Self::BosniaAndHerzegovina,
        Self::Belgium,
        Self::Bulgaria,
        Self::Bahrain,
        Self::Burundi,
        Self::Brazil,
        Self::Belarus,
        Self::Switzerland,
        Self::CostaRica,
        Self::Cyprus,
        Self::Czechia,
        Self::Germany,
        Self::Djibouti,
        Self::Denmark,
        Self::DominicanRepublic,
        Self::Estonia,
        Self::Egypt,
        Self::Spain,
        Self::Finland,
        Self::FalklandIslands,
        Self::FaroeIslands,
        Self::France,
        Self::UnitedKingdom,
        Self::Georgia,
        Self::Gibraltar,
        Self::Greenland,
        Self::Greece,
        Self::Guatemala,
        Self::Croatia,
        Self::Hungary,
        Self::Ireland,
        Self::Israel,
        Self::Iraq,
        Self::Iceland,
        Self::Italy,
        Self::Jordan,
        Self::Kuwait,
        Self::Kazakhstan,
        Self::Lebanon,
        Self::SaintLucia,
        Self::Liechtenstein,
        Self::Lithuania,
        Self::Luxembourg,
        Self::Latvia,
        Self::Libya,
        Self::Monaco,
        Self::Moldova,
        Self::Montenegro,
        Self::NorthMacedonia,
        Self::Mongolia,
        Self::Mauritania,
        Self::Malta,
        Self::Mauritius,
        Self::Netherlands,
        Self::Norway,
        Self::Oman,
        Self::Pakistan,
        Self::Poland,
        Self::Palestine,
        Self::Portugal,
        Self::Qatar,
        Self::Romania,
        Self::Serbia,
        Self::Russia,
        Self::SaudiArabia,
        Self::Seychelles,
        Self::Sudan,
        Self::Sweden,
        Self::Slovenia,
        Self::Slovakia,
        Self::SanMarino,
        Self::Somalia,
        Self::SaoTomeAndPrincipe,
        Self::ElSalvador,
        Self::TimorLeste,
        Self::Tunisia,
        Self::Turkey,
        Self::Ukraine,
        Self::VaticanCity,
        Self::BritishVirginIslands,
        Self::Kosovo,
    ];

    /// Looks up a country by its two-letter code.
    ///
    /// The match is exact and case-sensitive: callers pass cleaned,
    /// upper-case input. Returns `None` for anything outside the registry,
    /// including strings that are not exactly two characters long.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "AD" => Some(Self::Andorra),
            "AE" => Some(Self::UnitedArabEmirates),
            "AL" => Some(Self::Albania),
            "AT" => Some(Self::Austria),
            "AZ" => Some(Self::Azerbaijan),
            "BA" => Some(Self::BosniaAndHerzegovina),
            "BE" => Some(Self::Belgium),
            "BG" => Some(Self::Bulgaria),
            "BH" => Some(Self::Bahrain),
            "BI" => Some(Self::Burundi),
            "BR" => Some(Self::Brazil),
            "BY" => Some(Self::Belarus),
            "CH" => Some(Self::Switzerland),
            "CR" => Some(Self::CostaRica),
            "CY" => Some(Self::Cyprus),
            "CZ" => Some(Self::Czechia),
            "DE" => Some(Self::Germany),
            "DJ" => Some(Self::Djibouti),
            "DK" => Some(Self::Denmark),
            "DO" => Some(Self::DominicanRepublic),
            "EE" => Some(Self::Estonia),
            "EG" => Some(Self::Egypt),
            "ES" => Some(Self::Spain),
            "FI" => Some(Self::Finland),
            "FK" => Some(Self::FalklandIslands),
            "FO" => Some(Self::FaroeIslands),
            "FR" => Some(Self::France),
            "GB" => Some(Self::UnitedKingdom),
            "GE" => Some(Self::Georgia),
            "GI" => Some(Self::Gibraltar),
            "GL" => Some(Self::Greenland),
            "GR" => Some(Self::Greece),
            "GT" => Some(Self::Guatemala),
            "HR" => Some(Self::Croatia),
            "HU" => Some(Self::Hungary),
            "IE" => Some(Self::Ireland),
            "IL" => Some(Self::Israel),
            "IQ" => Some(Self::Iraq),
            "IS" => Some(Self::Iceland),
            "IT" => Some(Self::Italy),
            "JO" => Some(Self::Jordan),
            "KW" => Some(Self::Kuwait),
            "KZ" => Some(Self::Kazakhstan),
            "LB" => Some(Self::Lebanon),
            "LC" => Some(Self::SaintLucia),
            "LI" => Some(Self::Liechtenstein),
            "LT" => Some(Self::Lithuania),
            "LU" => Some(Self::Luxembourg),
            "LV" => Some(Self::Latvia),
            "LY" => Some(Self::Libya),
            "MC" => Some(Self::Monaco),
            "MD" => Some(Self::Moldova),
            "ME" => Some(Self::Montenegro),
            "MK" => Some(Self::NorthMacedonia),
            "MN" => Some(Self::Mongolia),
            "MR" => Some(Self::Mauritania),
            "MT" => Some(Self::Malta),
            "MU" => Some(Self::Mauritius),
            "NL" => Some(Self::Netherlands),
            "NO" => Some(Self::Norway),
            "OM" => Some(Self::Oman),
            "PK" => Some(Self::Pakistan),
            "PL" => Some(Self::Poland),
            "PS" => Some(Self::Palestine),
            "PT" => Some(Self::Portugal),
            "QA" => Some(Self::Qatar),
            "RO" => Some(Self::Romania),
            "RS" => Some(Self::Serbia),
            "RU" => Some(Self::Russia),
            "SA" => Some(Self::SaudiArabia),
            "SC" => Some(Self::Seychelles),
            "SD" => Some(Self::Sudan),
            "SE" => Some(Self::Sweden),
            "SI" => Some(Self::Slovenia),
            "SK" => Some(Self::Slovakia),
            "SM" => Some(Self::SanMarino),
            "SO" => Some(Self::Somalia),
            "ST" => Some(Self::SaoTomeAndPrincipe),
            "SV" => Some(Self::ElSalvador),
            "TL" => Some(Self::TimorLeste),
            "TN" => Some(Self::Tunisia),
            "TR" => Some(Self::Turkey),
            "UA" => Some(Self::Ukraine),
            "VA" => Some(Self::VaticanCity),
            "VG" => Some(Self::BritishVirginIslands),
            "XK" => Some(Self::Kosovo),
            _ => None,
        }
    }

    /// Resolves the country named by the first two characters of a cleaned IBAN.
    ///
    /// Returns `None` if `cleaned` is shorter than two characters or its prefix
    /// is not a registry code.
    pub fn from_iban_prefix(cleaned: &str) -> Option<Self> {
        country_prefix(cleaned).and_then(Self::from_code)
    }

    /// The ISO 3166-1 alpha-2 code, e.g. `"FR"`.
    pub fn code(self) -> &'static str {
        match self {
            Self::Andorra => "AD",
            Self::UnitedArabEmirates => "AE",
            Self::Albania => "AL",
            Self::Austria => "AT",
            Self::Azerbaijan => "AZ",
            Self::BosniaAndHerzegovina => "BA",
            Self::Belgium => "BE",
            Self::Bulgaria => "BG",
            Self::Bahrain => "BH",
            Self::Burundi => "BI",
            Self::Brazil => "BR",
            Self::Belarus => "BY",
            Self::Switzerland => "CH",
            Self::CostaRica => "CR",
            Self::Cyprus => "CY",
            Self::Czechia => "CZ",
            Self::Germany => "DE",
            Self::Djibouti => "DJ",
            Self::Denmark => "DK",
            Self::DominicanRepublic => "DO",
            Self::Estonia => "EE",
            Self::Egypt => "EG",
            Self::Spain => "ES",
            Self::Finland => "FI",
            Self::FalklandIslands => "FK",
            Self::FaroeIslands => "FO",
            Self::France => "FR",
            Self::UnitedKingdom => "GB",
            Self::Georgia => "GE",
            Self::Gibraltar => "GI",
            Self::Greenland => "GL",
            Self::Greece => "GR",
            Self::Guatemala => "GT",
            Self::Croatia => "HR",
            Self::Hungary => "HU",
            Self::Ireland => "IE",
            Self::Israel => "IL",
            Self::Iraq => "IQ",
            Self::Iceland => "IS",
            Self::Italy => "IT",
            Self::Jordan => "JO",
            Self::Kuwait => "KW",
            Self::Kazakhstan => "KZ",
            Self::Lebanon => "LB",
            Self::SaintLucia => "LC",
            Self::Liechtenstein => "LI",
            Self::Lithuania => "LT",
            Self::Luxembourg => "LU",
            Self::Latvia => "LV",
            Self::Libya => "LY",
            Self::Monaco => "MC",
            Self::Moldova => "MD",
            Self::Montenegro => "ME",
            Self::NorthMacedonia => "MK",
            Self::Mongolia => "MN",
            Self::Mauritania => "MR",
            Self::Malta => "MT",
            Self::Mauritius => "MU",
            Self::Netherlands => "NL",
            Self::Norway => "NO",
            Self::Oman => "OM",
            Self::Pakistan => "PK",
            Self::Poland => "PL",
            Self::Palestine => "PS",
            Self::Portugal => "PT",
            Self::Qatar => "QA",
            Self::Romania => "RO",
            Self::Serbia => "RS",
            Self::Russia => "RU",
            Self::SaudiArabia => "SA",
            Self::Seychelles => "SC",
            Self::Sudan => "SD",
            Self::Sweden => "SE",
            Self::Slovenia => "SI",
            Self::Slovakia => "SK",
            Self::SanMarino => "SM",
            Self::Somalia => "SO",
            Self::SaoTomeAndPrincipe => "ST",
            Self::ElSalvador => "SV",
            Self::TimorLeste => "TL",
            Self::Tunisia => "TN",
            Self::Turkey => "TR",
            Self::Ukraine => "UA",
            Self::VaticanCity => "VA",
            Self::BritishVirginIslands => "VG",
            Self::Kosovo => "XK",
        }
    }

    /// The English short name, e.g. `"France"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Andorra => "Andorra",
            Self::UnitedArabEmirates => "United Arab Emirates",
            Self::Albania => "Albania",
            Self::Austria => "Austria",
            Self::Azerbaijan => "Azerbaijan",
            Self::BosniaAndHerzegovina => "Bosnia and Herzegovina",
            Self::Belgium => "Belgium",
            Self::Bulgaria => "Bulgaria",
            Self::Bahrain => "Bahrain",
            Self::Burundi => "Burundi",
            Self::Brazil => "Brazil",
            Self::Belarus => "Belarus",
            Self::Switzerland => "Switzerland",
            Self::CostaRica => "Costa Rica",
            Self::Cyprus => "Cyprus",
            Self::Czechia => "Czechia",
            Self::Germany => "Germany",
            Self::Djibouti => "Djibouti",
            Self::Denmark => "Denmark",
            Self::DominicanRepublic => "Dominican Republic",
            Self::Estonia => "Estonia",
            Self::Egypt => "Egypt",
            Self::Spain => "Spain",
            Self::Finland => "Finland",
            Self::FalklandIslands => "Falkland Islands",
            Self::FaroeIslands => "Faroe Islands",
            Self::France => "France",
            Self::UnitedKingdom => "United Kingdom",
            Self::Georgia => "Georgia",
            Self::Gibraltar => "Gibraltar",
            Self::Greenland => "Greenland",
            Self::Greece => "Greece",
            Self::Guatemala => "Guatemala",
            Self::Croatia => "Croatia",
            Self::Hungary => "Hungary",
            Self::Ireland => "Ireland",
            Self::Israel => "Israel",
            Self::Iraq => "Iraq",
            Self::Iceland => "Iceland",
            Self::Italy => "Italy",
            Self::Jordan => "Jordan",
            Self::Kuwait => "Kuwait",
            Self::Kazakhstan => "Kazakhstan",
            Self::Lebanon => "Lebanon",
            Self::SaintLucia => "Saint Lucia",
            Self::Liechtenstein => "Liechtenstein",
            Self::Lithuania => "Lithuania",
            Self::Luxembourg => "Luxembourg",
            Self::Latvia => "Latvia",
            Self::Libya => "Libya",
            Self::Monaco => "Monaco",
            Self::Moldova => "Moldova",
            Self::Montenegro => "Montenegro",
            Self::NorthMacedonia => "North Macedonia",
            Self::Mongolia => "Mongolia",
            Self::Mauritania => "Mauritania",
            Self::Malta => "Malta",
            Self::Mauritius => "Mauritius",
            Self::Netherlands => "Netherlands",
            Self::Norway => "Norway",
            Self::Oman => "Oman",
            Self::Pakistan => "Pakistan",
            Self::Poland => "Poland",
            Self::Palestine => "Palestine",
            Self::Portugal => "Portugal",
            Self::Qatar => "Qatar",
            Self::Romania => "Romania",
            Self::Serbia => "Serbia",
            Self::Russia => "Russia",
            Self::SaudiArabia => "Saudi Arabia",
            Self::Seychelles => "Seychelles",
            Self::Sudan => "Sudan",
            Self::Sweden => "Sweden",
            Self::Slovenia => "Slovenia",
            Self::Slovakia => "Slovakia",
            Self::SanMarino => "San Marino",
            Self::Somalia => "Somalia",
            Self::SaoTomeAndPrincipe => "Sao Tome and Principe",
            Self::ElSalvador => "El Salvador",
            Self::TimorLeste => "Timor-Leste",
            Self::Tunisia => "Tunisia",
            Self::Turkey => "Turkey",
            Self::Ukraine => "Ukraine",
            Self::VaticanCity => "Vatican City",
            Self::BritishVirginIslands => "British Virgin Islands",
            Self::Kosovo => "Kosovo",
        }
    }

    /// The exact number of characters every IBAN of this country has.
    pub fn iban_length(self) -> usize {
        match self {
            Self::Norway => 15,
            Self::Belgium => 16,
            Self::Denmark
            | Self::Finland
            | Self::FalklandIslands
            | Self::FaroeIslands
            | Self::Greenland
            | Self::Netherlands
            | Self::Sudan => 18,
            Self::NorthMacedonia | Self::Slovenia => 19,
            Self::Austria
            | Self::BosniaAndHerzegovina
            | Self::Estonia
            | Self::Kazakhstan
            | Self::Lithuania
            | Self::Luxembourg
            | Self::Mongolia
            | Self::Kosovo => 20,
            Self::Switzerland | Self::Croatia | Self::Liechtenstein | Self::Latvia => 21,
            Self::Bulgaria
            | Self::Bahrain
            | Self::CostaRica
            | Self::Germany
            | Self::UnitedKingdom
            | Self::Georgia
            | Self::Ireland
            | Self::Montenegro
            | Self::Serbia
            | Self::VaticanCity => 22,
            Self::UnitedArabEmirates
            | Self::Gibraltar
            | Self::Israel
            | Self::Iraq
            | Self::Oman
            | Self::Somalia
            | Self::TimorLeste => 23,
            Self::Andorra
            | Self::Czechia
            | Self::Spain
            | Self::Moldova
            | Self::Pakistan
            | Self::Romania
            | Self::SaudiArabia
            | Self::Sweden
            | Self::Slovakia
            | Self::Tunisia
            | Self::BritishVirginIslands => 24,
            Self::Libya | Self::Portugal | Self::SaoTomeAndPrincipe => 25,
            Self::Iceland | Self::Turkey => 26,
            Self::Burundi
            | Self::Djibouti
            | Self::France
            | Self::Greece
            | Self::Italy
            | Self::Monaco
            | Self::Mauritania
            | Self::SanMarino => 27,
            Self::Albania
            | Self::Azerbaijan
            | Self::Belarus
            | Self::Cyprus
            | Self::DominicanRepublic
            | Self::Guatemala
            | Self::Hungary
            | Self::Lebanon
            | Self::Poland
            | Self::ElSalvador => 28,
            Self::Brazil | Self::Egypt | Self::Palestine | Self::Qatar | Self::Ukraine => 29,
            Self::Jordan | Self::Kuwait | Self::Mauritius => 30,
            Self::Malta | Self::Seychelles => 31,
            Self::SaintLucia => 32,
            Self::Russia => 33,
        }
    }

    /// Length of the basic bank account number: the IBAN minus the country
    /// code and check digits.
    pub fn bban_length(self) -> usize {
        self.iban_length() - 4
    }

    /// The display mask for this country's IBANs.
    pub fn format_mask(self) -> FormatMask {
        if self == Self::Seychelles {
            FormatMask::explicit(SEYCHELLES_MASK)
        } else {
            FormatMask::grouped(self.iban_length())
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = UnknownCountryCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownCountryCode {
            code: s.to_owned(),
        })
    }
}

impl Serialize for Country {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Country {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::from_str(&s).map_err(de::Error::custom)
    }
}

/// Returns the first two characters of `cleaned`, or `None` if it is shorter.
///
/// Splits on character boundaries, so a multi-byte character in the first
/// two positions is returned whole rather than cut.
pub fn country_prefix(cleaned: &str) -> Option<&str> {
    let mut chars = cleaned.char_indices();
    chars.nth(1)?;
    let end = chars.next().map_or(cleaned.len(), |(end, _)| end);
    Some(&cleaned[..end])
}

/// Returns the required total IBAN length for a two-letter country code.
///
/// `None` when the code is not in the registry or has fewer than two
/// characters.
///
/// # Examples
///
/// ```
/// use iban_core::expected_length;
///
/// assert_eq!(expected_length("FR"), Some(27));
/// assert_eq!(expected_length("ZZ"), None);
/// assert_eq!(expected_length("F"), None);
/// ```
pub fn expected_length(country_code: &str) -> Option<usize> {
    Country::from_code(country_code).map(Country::iban_length)
}

/// Returns the registry country of `iban`, cleaning it first.
///
/// # Examples
///
/// ```
/// use iban_core::{Country, country_code};
///
/// assert_eq!(country_code(" gb82 west 1234"), Some(Country::UnitedKingdom));
/// assert_eq!(country_code("ZZ00"), None);
/// ```
pub fn country_code(iban: &str) -> Option<Country> {
    Country::from_iban_prefix(&crate::charset::clean(iban))
}
