pub const HARDCODED: &[&str] = &[
    "javdb",
    "laowang",
    "fansky",
    "pixiv",
    "south-plus",
    "laoli.one",
    "ctee.kr",
    "puremedia",
    "yeha_",
    "javbus",
    "javlibrary",
    "jable",
    "missav",
    "hanime1",
    "2dfan",
    "njav",
    "avmoo",
    "javmost",
    "javfree",
    "javhd",
    "18comic",
    "pornhub",
    "xvideos",
    "xnxx",
    "redtube",
    "youporn",
    "tube8",
    "spankbang",
    "xhamster",
    "beeg",
    "tnaflix",
    "drtuber",
    "slutload",
    "91porn",
    "caoliu",
    "1024",
    "chaturbate",
    "myfreecams",
    "camsoda",
    "stripchat",
    "bongacams",
    "livejasmin",
    "flirt4free",
    "porn",
    "xxx",
    "erotic",
    "hentai",
    "pornsite",
    "sexvideo",
    "adultsite",
];

pub const SOFT: &[&str] = &[
    "youtube.com/watch",
    "youtube.com/shorts",
    "bilibili.com/video",
    "douyin.com",
    "tiktok.com",
    "twitch.tv",
];

pub const EXACT_MATCH: &[&str] = &[
    "youtube.com",
    "bilibili.com",
    "reddit.com",
    "x.com",
    "twitter.com",
    "weibo.com",
    "zhihu.com",
];

pub fn owned(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|entry| entry.to_string()).collect()
}
