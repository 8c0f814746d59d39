//! Embedded sample dataset for the in-memory store.
//!
//! A small slice of commonly accessed passages (KJV text) plus the version
//! catalog and the popular-verse rotation used for the daily verse. Chapters
//! absent from this table are served as synthesized placeholders by the
//! resolver, so the dataset being sparse is expected — some chapters carry
//! only the well-known verses.

/// Version catalog rows: (id, code, full name, language).
pub(crate) const VERSIONS: [(&str, &str, &str, &str); 5] = [
    ("1", "KJV", "King James Version", "English"),
    ("2", "ESV", "English Standard Version", "English"),
    ("3", "NIV", "New International Version", "English"),
    ("4", "NASB", "New American Standard Bible", "English"),
    ("5", "NLT", "New Living Translation", "English"),
];

/// Popular verses for the daily rotation: (reference, text).
pub(crate) const POPULAR_VERSES: [(&str, &str); 10] = [
    ("John 3:16", "For God so loved the world, that he gave his only begotten Son, that whosoever believeth in him should not perish, but have everlasting life."),
    ("Jeremiah 29:11", "For I know the thoughts that I think toward you, saith the LORD, thoughts of peace, and not of evil, to give you an expected end."),
    ("Philippians 4:13", "I can do all things through Christ which strengtheneth me."),
    ("Romans 8:28", "And we know that all things work together for good to them that love God, to them who are the called according to his purpose."),
    ("Psalm 23:1", "The LORD is my shepherd; I shall not want."),
    ("Proverbs 3:5-6", "Trust in the LORD with all thine heart; and lean not unto thine own understanding. In all thy ways acknowledge him, and he shall direct thy paths."),
    ("Isaiah 40:31", "But they that wait upon the LORD shall renew their strength; they shall mount up with wings as eagles; they shall run, and not be weary; and they shall walk, and not faint."),
    ("1 Corinthians 13:4", "Charity suffereth long, and is kind; charity envieth not; charity vaunteth not itself, is not puffed up."),
    ("Galatians 5:22-23", "But the fruit of the Spirit is love, joy, peace, longsuffering, gentleness, goodness, faith, meekness, temperance: against such there is no law."),
    ("Matthew 28:19-20", "Go ye therefore, and teach all nations, baptizing them in the name of the Father, and of the Son, and of the Holy Ghost: Teaching them to observe all things whatsoever I have commanded you: and, lo, I am with you always, even unto the end of the world. Amen."),
];

/// Sample chapter text keyed by (book position, chapter): verse number -> text.
pub(crate) const SAMPLE_CHAPTERS: [((u8, u32), &[(u32, &str)]); 8] = [
    // Genesis 1 - Creation
    ((1, 1), &[
        (1, "In the beginning God created the heaven and the earth."),
        (2, "And the earth was without form, and void; and darkness was upon the face of the deep. And the Spirit of God moved upon the face of the waters."),
        (3, "And God said, Let there be light: and there was light."),
        (4, "And God saw the light, that it was good: and God divided the light from the darkness."),
        (5, "And God called the light Day, and the darkness he called Night. And the evening and the morning were the first day."),
        (6, "And God said, Let there be a firmament in the midst of the waters, and let it divide the waters from the waters."),
        (7, "And God made the firmament, and divided the waters which were under the firmament from the waters which were above the firmament: and it was so."),
        (8, "And God called the firmament Heaven. And the evening and the morning were the second day."),
        (9, "And God said, Let the waters under the heaven be gathered together unto one place, and let the dry land appear: and it was so."),
        (10, "And God called the dry land Earth; and the gathering together of the waters called he Seas: and God saw that it was good."),
    ]),
    // Psalm 23 - The Shepherd Psalm
    ((19, 23), &[
        (1, "The LORD is my shepherd; I shall not want."),
        (2, "He maketh me to lie down in green pastures: he leadeth me beside the still waters."),
        (3, "He restoreth my soul: he leadeth me in the paths of righteousness for his name's sake."),
        (4, "Yea, though I walk through the valley of the shadow of death, I will fear no evil: for thou art with me; thy rod and thy staff they comfort me."),
        (5, "Thou preparest a table before me in the presence of mine enemies: thou anointest my head with oil; my cup runneth over."),
        (6, "Surely goodness and mercy shall follow me all the days of my life: and I will dwell in the house of the LORD for ever."),
    ]),
    // Isaiah 40:28-31
    ((23, 40), &[
        (28, "Hast thou not known? hast thou not heard, that the everlasting God, the LORD, the Creator of the ends of the earth, fainteth not, neither is weary? there is no searching of his understanding."),
        (29, "He giveth power to the faint; and to them that have no might he increaseth strength."),
        (30, "Even the youths shall faint and be weary, and the young men shall utterly fall:"),
        (31, "But they that wait upon the LORD shall renew their strength; they shall mount up with wings as eagles; they shall run, and not be weary; and they shall walk, and not faint."),
    ]),
    // Jeremiah 29:11-13
    ((24, 29), &[
        (11, "For I know the thoughts that I think toward you, saith the LORD, thoughts of peace, and not of evil, to give you an expected end."),
        (12, "Then shall ye call upon me, and ye shall go and pray unto me, and I will hearken unto you."),
        (13, "And ye shall seek me, and find me, when ye shall search for me with all your heart."),
    ]),
    // Matthew 5 - The Beatitudes
    ((40, 5), &[
        (1, "And seeing the multitudes, he went up into a mountain: and when he was set, his disciples came unto him:"),
        (2, "And he opened his mouth, and taught them, saying,"),
        (3, "Blessed are the poor in spirit: for theirs is the kingdom of heaven."),
        (4, "Blessed are they that mourn: for they shall be comforted."),
        (5, "Blessed are the meek: for they shall inherit the earth."),
        (6, "Blessed are they which do hunger and thirst after righteousness: for they shall be filled."),
        (7, "Blessed are the merciful: for they shall obtain mercy."),
        (8, "Blessed are the pure in heart: for they shall see God."),
        (9, "Blessed are the peacemakers: for they shall be called the children of God."),
        (10, "Blessed are they which are persecuted for righteousness' sake: for theirs is the kingdom of heaven."),
        (11, "Blessed are ye, when men shall revile you, and persecute you, and shall say all manner of evil against you falsely, for my sake."),
        (12, "Rejoice, and be exceeding glad: for great is your reward in heaven: for so persecuted they the prophets which were before you."),
    ]),
    // John 3 - God's Love
    ((43, 3), &[
        (1, "There was a man of the Pharisees, named Nicodemus, a ruler of the Jews:"),
        (2, "The same came to Jesus by night, and said unto him, Rabbi, we know that thou art a teacher come from God: for no man can do these miracles that thou doest, except God be with him."),
        (3, "Jesus answered and said unto him, Verily, verily, I say unto thee, Except a man be born again, he cannot see the kingdom of God."),
        (4, "Nicodemus saith unto him, How can a man be born when he is old? can he enter the second time into his mother's womb, and be born?"),
        (5, "Jesus answered, Verily, verily, I say unto thee, Except a man be born of water and of the Spirit, he cannot enter into the kingdom of God."),
        (14, "And as Moses lifted up the serpent in the wilderness, even so must the Son of man be lifted up:"),
        (15, "That whosoever believeth in him should not perish, but have eternal life."),
        (16, "For God so loved the world, that he gave his only begotten Son, that whosoever believeth in him should not perish, but have everlasting life."),
        (17, "For God sent not his Son into the world to condemn the world; but that the world through him might be saved."),
        (18, "He that believeth on him is not condemned: but he that believeth not is condemned already, because he hath not believed in the name of the only begotten Son of God."),
        (19, "And this is the condemnation, that light is come into the world, and men loved darkness rather than light, because their deeds were evil."),
        (20, "For every one that doeth evil hateth the light, neither cometh to the light, lest his deeds should be reproved."),
        (21, "But he that doeth truth cometh to the light, that his deeds may be made manifest, that they are wrought in God."),
    ]),
    // Romans 8 - Life in the Spirit
    ((45, 8), &[
        (1, "There is therefore now no condemnation to them which are in Christ Jesus, who walk not after the flesh, but after the Spirit."),
        (28, "And we know that all things work together for good to them that love God, to them who are the called according to his purpose."),
        (29, "For whom he did foreknow, he also did predestinate to be conformed to the image of his Son, that he might be the firstborn among many brethren."),
        (30, "Moreover whom he did predestinate, them he also called: and whom he called, them he also justified: and whom he justified, them he also glorified."),
        (31, "What shall we then say to these things? If God be for us, who can be against us?"),
        (32, "He that spared not his own Son, but delivered him up for us all, how shall he not with him also freely give us all things?"),
        (33, "Who shall lay any thing to the charge of God's elect? It is God that justifieth."),
        (34, "Who is he that condemneth? It is Christ that died, yea rather, that is risen again, who is even at the right hand of God, who also maketh intercession for us."),
        (35, "Who shall separate us from the love of Christ? shall tribulation, or distress, or persecution, or famine, or nakedness, or peril, or sword?"),
        (36, "As it is written, For thy sake we are killed all the day long; we are accounted as sheep for the slaughter."),
        (37, "Nay, in all these things we are more than conquerors through him that loved us."),
        (38, "For I am persuaded, that neither death, nor life, nor angels, nor principalities, nor powers, nor things present, nor things to come,"),
        (39, "Nor height, nor depth, nor any other creature, shall be able to separate us from the love of God, which is in Christ Jesus our Lord."),
    ]),
    // Philippians 4 - Rejoice in the Lord
    ((50, 4), &[
        (1, "Therefore, my brethren dearly beloved and longed for, my joy and crown, so stand fast in the Lord, my dearly beloved."),
        (4, "Rejoice in the Lord always: and again I say, Rejoice."),
        (5, "Let your moderation be known unto all men. The Lord is at hand."),
        (6, "Be careful for nothing; but in every thing by prayer and supplication with thanksgiving let your requests be made known unto God."),
        (7, "And the peace of God, which passeth all understanding, shall keep your hearts and minds through Christ Jesus."),
        (8, "Finally, brethren, whatsoever things are true, whatsoever things are honest, whatsoever things are just, whatsoever things are pure, whatsoever things are lovely, whatsoever things are of good report; if there be any virtue, and if there be any praise, think on these things."),
        (13, "I can do all things through Christ which strengtheneth me."),
    ]),
];
