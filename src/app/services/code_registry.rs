//! Code-to-label lookups for short catalogue codes
//!
//! The decoder only ever produces raw codes; resolving them to
//! human-readable labels is this module's job. Tables follow the code
//! listings published alongside the catalogue. Lookups are
//! padding-insensitive on the 5-character fixed-width codes, and unknown
//! codes yield `None` rather than an error, since the code listings grow
//! faster than any snapshot of them.

/// Human-readable description of an operational status code
pub fn status_description(code: char) -> Option<&'static str> {
    match code {
        '+' => Some("Operational"),
        '-' => Some("Nonoperational"),
        'P' => Some("Partially Operational"),
        'B' => Some("Backup/Standby"),
        'S' => Some("Spare"),
        'X' => Some("Extended Mission"),
        'D' => Some("Decayed"),
        '?' => Some("Unknown"),
        _ => None,
    }
}

/// Owning organisation for a 5-character source code
pub fn source_name(code: &str) -> Option<&'static str> {
    match code.trim_end() {
        "AB" => Some("Arab Satellite Communications Organization"),
        "ARGN" => Some("Argentina"),
        "AUS" => Some("Australia"),
        "BRAZ" => Some("Brazil"),
        "CA" => Some("Canada"),
        "CIS" => Some("Commonwealth of Independent States (former USSR)"),
        "ESA" => Some("European Space Agency"),
        "EUTE" => Some("European Telecommunications Satellite Organization (EUTELSAT)"),
        "FR" => Some("France"),
        "GER" => Some("Germany"),
        "IND" => Some("India"),
        "INDO" => Some("Indonesia"),
        "ISRA" => Some("Israel"),
        "IT" => Some("Italy"),
        "JPN" => Some("Japan"),
        "PRC" => Some("People's Republic of China"),
        "SES" => Some("SES World Skies"),
        "SKOR" => Some("Republic of Korea (South Korea)"),
        "SPN" => Some("Spain"),
        "UK" => Some("United Kingdom"),
        "US" => Some("United States"),
        _ => None,
    }
}

/// Launch site name for a 5-character site code
pub fn launch_site_name(code: &str) -> Option<&'static str> {
    match code.trim_end() {
        "AFETR" => Some("Air Force Eastern Test Range, Florida, USA"),
        "AFWTR" => Some("Air Force Western Test Range, California, USA"),
        "FRGUI" => Some("Europe's Spaceport, Kourou, French Guiana"),
        "HGSTR" => Some("Hammaguira Space Track Range, Algeria"),
        "JSC" => Some("Jiuquan Satellite Launch Center, China"),
        "KODAK" => Some("Kodiak Launch Complex, Alaska, USA"),
        "KSCUT" => Some("Uchinoura Space Center, Japan"),
        "KYMSC" => Some("Kapustin Yar Missile and Space Complex, Russia"),
        "PLMSC" => Some("Plesetsk Missile and Space Complex, Russia"),
        "SEAL" => Some("Sea Launch Platform (mobile)"),
        "SNMLP" => Some("San Marco Launch Platform, Indian Ocean (Kenya)"),
        "SRILR" => Some("Satish Dhawan Space Centre, India"),
        "TAISC" => Some("Taiyuan Satellite Launch Center, China"),
        "TANSC" => Some("Tanegashima Space Center, Japan"),
        "TYMSC" => Some("Tyuratam Missile and Space Center, Kazakhstan (Baikonur)"),
        "VOSTO" => Some("Vostochny Cosmodrome, Russia"),
        "WLPIS" => Some("Wallops Island, Virginia, USA"),
        "WOMRA" => Some("Woomera, Australia"),
        "XICLF" => Some("Xichang Launch Facility, China"),
        "YAVNE" => Some("Yavne Launch Facility, Israel"),
        _ => None,
    }
}

/// Human-readable description of the 3-character orbital status code
///
/// A blank code means the object is in Earth orbit with current elements.
pub fn orbital_status_description(code: &str) -> Option<&'static str> {
    match code.trim_end() {
        "" => Some("In Earth orbit"),
        "NCE" => Some("No Current Elements"),
        "NIE" => Some("No Initial Elements"),
        "NEA" => Some("No Elements Available"),
        "DOC" => Some("Permanently Docked"),
        "ISS" => Some("Docked to the International Space Station"),
        _ => None,
    }
}
