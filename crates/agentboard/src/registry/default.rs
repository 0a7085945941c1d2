use std::collections::HashMap;

/// Players with a submitted configuration in the shipped prompt collection.
const DEFAULT_PLAYER_FILES: &[(&str, &str)] = &[
    ("agrawalom", "agrawalom_737988_25383356_config_v13.yml"),
    ("aoorange", "aoorange_722540_25372279_config-2.yml"),
    ("chenyufei", "chenyufei_662534_25342365_config.yml"),
    ("davidmatteo", "davidmatteo_749038_25383022_config.yml"),
    ("enchristopher", "enchristopher_602285_25348856_config.yml"),
    ("fangyuan", "fangyuan_LATE_736625_25402497_config.yml"),
    ("huangziyu", "huangziyu_600639_25345415_config.yml"),
    ("linjiayi", "linjiayi_742390_25311749_config.yml"),
    ("listeven", "listeven_736587_25386131_config.yml"),
    ("litvakron", "litvakron_LATE_721981_25391228_Config.yml"),
    ("liuwenxuan", "liuwenxuan_LATE_749142_25390122_config.yml"),
    ("lunamugicajose", "lunamugicajose_722218_25384298_config_JML.yml"),
    ("mutolovincent", "mutolovincent_660111_25380863_config.yml"),
    ("niruichen", "niruichen_749387_25381152_config.yml"),
    ("pengjinjun", "pengjinjun_657484_25363213_config.yml"),
    ("schuettmaximilian", "schuettmaximilian_742091_25384969_config.yml"),
    ("shanzhihao", "shanzhihao_733390_25385717_config.yml"),
    ("singhsanjeevan", "singhsanjeevan_806110_25385314_config.yml"),
    ("srivastavaaayush", "srivastavaaayush_LATE_732701_25389500_config.yml"),
    ("sunclaire", "sunclaire_733356_25370888_config.yml"),
    ("venkatanarayanannaveen", "venkatanarayanannaveen_764261_25385794_config.yml"),
    ("wanganda", "wanganda_736635_25292697_config.yml"),
    ("wangarabella", "wangarabella_736620_25345819_config.yml"),
    ("wangsherry", "wangsherry_738330_25385663_config.yml"),
    ("wangyuan", "wangyuan_736533_25383342_config.yml"),
    ("xiaoyue", "xiaoyue_736540_25350835_config.yml"),
    ("yangganxiang", "yangganxiang_737248_25349835_config-6.yml"),
    ("yenaimeng", "yenaimeng_LATE_605475_25475845_yenaimeng_LATE_605475_25474277_config.yml"),
    ("yujiehang", "yujiehang_596718_25359060_config.yml"),
    ("zhangjingwen", "zhangjingwen_412991_25379656_config.yml"),
    ("zhangkarina", "zhangkarina_666586_25359184_config.yml"),
    ("zhaoweiliang", "zhaoweiliang_668422_25383613_config.yml"),
    ("zhenggary", "zhenggary_736563_25357709_config.yml"),
    ("zhouevan", "zhouevan_663610_25377311_congfig.yml"),
    ("zhuruby", "zhuruby_736383_25337304_config_1013.yml"),
    ("zhutianlei", "zhutianlei_732667_25376948_config.yml"),
];

pub fn default_player_files() -> HashMap<String, String> {
    DEFAULT_PLAYER_FILES
        .iter()
        .map(|(player, file)| (player.to_ascii_lowercase(), file.to_string()))
        .collect()
}
