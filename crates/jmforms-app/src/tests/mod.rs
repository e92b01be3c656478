mod convert_tests;

use std::path::Path;

use jmforms_config::Config;
use jmforms_config::output::OutputConfig;

/// Small JMdict-shaped document covering each reading marker
pub const SAMPLE_JMDICT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE JMdict [
<!ELEMENT JMdict (entry*)>
<!ENTITY uk "word usually written using kana alone">
<!ENTITY arch "archaism">
]>
<JMdict>
<entry>
<ent_seq>1001</ent_seq>
<k_ele><keb>魚虱</keb></k_ele>
<r_ele><reb>うおじらみ</reb><re_restr>魚虱</re_restr></r_ele>
<r_ele><reb>ウオジラミ</reb><re_nokanji/></r_ele>
<sense><misc>&uk;</misc><gloss>fish louse</gloss></sense>
<sense><misc>&uk;</misc><gloss>carp louse</gloss></sense>
<sense><misc>&arch;</misc><gloss>Argulus japonicus</gloss></sense>
</entry>
<entry>
<ent_seq>2038970</ent_seq>
<k_ele><keb>不審者</keb></k_ele>
<r_ele><reb>ふしんしゃ</reb></r_ele>
<sense><gloss>suspicious person</gloss></sense>
</entry>
<entry>
<ent_seq>1264540</ent_seq>
<k_ele><keb>言葉</keb></k_ele>
<k_ele><keb>詞</keb></k_ele>
<r_ele><reb>ことば</reb></r_ele>
<sense><gloss>word</gloss></sense>
</entry>
<entry>
<ent_seq>1012320</ent_seq>
<r_ele><reb>むかつく</reb></r_ele>
<sense><misc>&uk;</misc><gloss>to feel sick</gloss></sense>
</entry>
</JMdict>
"#;

pub const SAMPLE_JSON: &str = r#"[
  {
    "reading": "うおじらみ",
    "expressions": [
      {
        "kanji": "魚虱"
      },
      {
        "kanji": "ウオジラミ",
        "override_reading": "ウオジラミ"
      },
      {
        "kanji": "うおじらみ"
      }
    ]
  },
  {
    "reading": "ことば",
    "expressions": [
      {
        "kanji": "言葉"
      },
      {
        "kanji": "詞"
      }
    ]
  }
]"#;

/// Config pointing at `input`, with both outputs under `root` (directories created)
pub fn config_in(root: &Path, input: &Path) -> Config {
    let opus_dir = root.join("output/opus/user_files");
    let mp3_dir = root.join("output/mp3/user_files");
    std::fs::create_dir_all(&opus_dir).expect("create opus dir");
    std::fs::create_dir_all(&mp3_dir).expect("create mp3 dir");

    Config {
        jmdict_path: input.to_path_buf(),
        output: OutputConfig {
            opus_path: opus_dir.join("jmdict_forms.json"),
            mp3_path: mp3_dir.join("jmdict_forms.json"),
        },
        log_json: false,
    }
}
