use crate::utils::get_exe_path_else_current;
use gettext::Catalog;
use std::fs::File;

pub fn get_lang() -> String {
    let lan = std::env::var("LANG");
    match lan {
        Ok(l) => {
            if l.len() > 0 {
                return l;
            }
        }
        Err(_) => {}
    }
    return String::from("en-US");
}

pub struct I18n {
    catalog: Option<Catalog>,
}

fn open_mo_file(molang: &str) -> Option<File> {
    let pb = get_exe_path_else_current();
    let base = String::from("patient_lookup");
    let fname = base + "." + molang.replace("-", "_").as_str() + ".mo";
    let p = pb.join(fname);
    if p.exists() {
        let f = File::open(p);
        match f {
            Ok(f) => {
                return Some(f);
            }
            Err(_) => {}
        }
    }
    #[cfg(not(target_os = "windows"))]
    {
        let mut p = pb.clone();
        p.pop();
        p.push(format!(
            "share/locale/{}/LC_MESSAGES/patient_lookup.mo",
            molang.replace("-", "_").as_str()
        ));
        if p.exists() {
            let f = File::open(p);
            match f {
                Ok(f) => {
                    return Some(f);
                }
                Err(_) => {}
            }
        }
    }
    return None;
}

impl I18n {
    pub fn new() -> I18n {
        let s = get_lang();
        let mut molang = s.as_str();
        if s.starts_with("zh") {
            let t = s.to_lowercase();
            if t == "zh-tw" || t == "zh-hant" || t == "zh-hk" {
                molang = "zh_TW";
            } else {
                molang = "zh_CN";
            }
        }
        let mut catalog: Option<Catalog> = None;
        let re = open_mo_file(molang);
        match re {
            Some(f) => {
                let re = Catalog::parse(f);
                match re {
                    Ok(c) => {
                        catalog = Some(c);
                    }
                    Err(_) => {}
                }
            }
            None => {}
        }
        return I18n { catalog: catalog };
    }
}

lazy_static! {
    #[doc(hidden)]
    static ref I18NT: I18n = I18n::new();
}

/// Get translation of text
/// * `s` - Origin text
pub fn gettext(s: &str) -> &str {
    match &I18NT.catalog {
        Some(c) => {
            return c.gettext(s);
        }
        None => {
            return s;
        }
    }
}
