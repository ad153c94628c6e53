//! Control polylines of the built-in courses.
//!
//! Each table is a coarse path in world units. [`super::road::bake`] turns it
//! into a dense station list when the catalog is loaded.

pub(crate) struct CourseTable {
    pub name: &'static str,
    /// Seed for the deterministic tree placement of this course.
    pub seed: u64,
    pub control_points: &'static [[f32; 2]],
}

pub(crate) const COURSES: [CourseTable; 4] = [
    CourseTable {
        name: "To Yashajin Pass",
        seed: 0x5941_5348,
        control_points: YASHAJIN,
    },
    CourseTable {
        name: "To Lake Motosu",
        seed: 0x4d4f_544f,
        control_points: MOTOSU,
    },
    CourseTable {
        name: "Bandai Azuma Skyline",
        seed: 0x4241_4e44,
        control_points: BANDAI_AZUMA,
    },
    CourseTable {
        name: "Hosaka Pass, Fukushima",
        seed: 0x484f_5341,
        control_points: HOSAKA,
    },
];

const YASHAJIN: &[[f32; 2]] = &[
    [0.0, 0.0], [-39.7, 115.1], [-111.1, 249.3], [-154.0, 387.7], [-229.1, 516.0],
    [-354.1, 597.2], [-483.5, 685.7], [-591.2, 754.0], [-707.4, 819.9], [-877.1, 838.2],
    [-1037.7, 769.6], [-1173.0, 704.4], [-1343.8, 662.5], [-1501.3, 606.7], [-1623.6, 509.1],
    [-1688.6, 370.8], [-1738.5, 228.4], [-1832.6, 90.0], [-1973.1, -1.5], [-2135.9, -4.1],
    [-2280.1, 69.6], [-2363.0, 222.9], [-2423.9, 367.8], [-2510.5, 523.0], [-2546.9, 673.3],
    [-2578.6, 813.4], [-2584.8, 942.8], [-2590.2, 1107.2], [-2621.8, 1282.9], [-2698.9, 1405.0],
    [-2766.9, 1528.8], [-2856.3, 1621.9], [-3011.7, 1668.9], [-3159.8, 1682.5],
    [-3300.1, 1699.7], [-3466.1, 1733.6], [-3600.0, 1828.5], [-3745.3, 1918.9],
    [-3854.4, 2006.5], [-4005.2, 2090.7], [-4169.4, 2105.5], [-4298.4, 2037.7],
    [-4395.6, 1939.3], [-4490.3, 1848.9], [-4479.2, 1688.5], [-4451.9, 1568.3],
    [-4532.5, 1476.3], [-4685.4, 1465.8], [-4791.3, 1525.3], [-4892.2, 1629.8],
    [-4935.8, 1743.0], [-4924.1, 1896.0], [-4890.2, 2042.3], [-4809.8, 2148.7],
    [-4700.3, 2249.8], [-4570.9, 2316.5], [-4411.5, 2365.6], [-4271.1, 2426.8],
    [-4159.3, 2499.6], [-4095.7, 2602.7], [-4074.2, 2729.9], [-4128.6, 2877.2],
    [-4193.0, 3032.2], [-4232.9, 3187.1],
];

const MOTOSU: &[[f32; 2]] = &[
    [0.0, 0.0], [-177.7, 62.1], [-329.7, 82.1], [-475.1, 80.7], [-666.3, 94.9], [-850.7, 101.9],
    [-1052.0, 113.5], [-1245.3, 98.6], [-1408.4, 67.3], [-1597.0, -0.7], [-1733.8, -99.6],
    [-1874.5, -245.9], [-2000.9, -354.7], [-2118.0, -447.5], [-2246.0, -590.4],
    [-2331.1, -721.7], [-2428.1, -827.9], [-2538.1, -931.5], [-2714.9, -1023.4],
    [-2858.0, -1047.8], [-3046.8, -1026.7], [-3220.5, -1009.2], [-3410.0, -1004.3],
    [-3563.5, -968.4], [-3707.9, -944.8], [-3870.8, -926.9], [-4016.3, -935.9],
    [-4153.1, -937.9], [-4329.6, -940.2], [-4506.3, -929.0], [-4687.6, -877.9],
    [-4810.4, -791.0], [-4952.7, -680.9], [-5086.4, -593.8], [-5224.7, -543.5],
    [-5410.5, -470.2], [-5533.3, -405.2], [-5638.9, -310.9], [-5786.3, -174.8],
    [-5884.0, -76.5], [-6000.2, 18.1], [-6120.5, 110.9], [-6221.0, 221.0], [-6303.6, 378.1],
    [-6327.7, 534.6], [-6292.8, 705.1], [-6236.0, 881.1], [-6148.6, 1005.7], [-6055.2, 1131.3],
    [-5941.8, 1232.5], [-5801.1, 1359.2], [-5686.0, 1480.9], [-5617.0, 1606.5],
    [-5524.0, 1744.2], [-5454.7, 1908.4], [-5441.0, 2077.8],
];

const BANDAI_AZUMA: &[[f32; 2]] = &[
    [0.0, 0.0], [-23.8, 141.5], [-66.8, 323.9], [-163.5, 483.1], [-270.0, 632.1],
    [-358.7, 726.9], [-436.3, 862.7], [-524.9, 970.4], [-660.9, 1048.7], [-831.4, 969.1],
    [-949.7, 840.3], [-1029.8, 687.2], [-1089.0, 547.3], [-1191.6, 395.2], [-1295.3, 249.0],
    [-1362.4, 77.2], [-1431.3, -99.6], [-1538.5, -237.7], [-1675.8, -344.4], [-1788.7, -433.3],
    [-1775.3, -624.5], [-1708.3, -768.1], [-1590.7, -857.9], [-1404.8, -902.1],
    [-1238.3, -937.5], [-1058.2, -961.9], [-907.7, -983.2], [-767.7, -997.1], [-610.1, -1055.8],
    [-477.2, -1165.7], [-362.7, -1257.9], [-265.6, -1398.7], [-202.5, -1517.2],
    [-179.4, -1657.4], [-178.9, -1800.4], [-164.8, -1928.7], [-89.3, -2105.1], [-37.0, -2240.3],
    [52.0, -2404.7], [124.7, -2574.5], [216.9, -2722.6], [294.0, -2874.7], [372.2, -3048.1],
    [458.3, -3203.3], [553.0, -3344.3], [678.7, -3482.6], [786.0, -3575.9], [779.9, -3752.4],
    [728.1, -3905.1], [680.5, -4067.3], [604.9, -4218.0], [502.8, -4354.8], [374.4, -4489.7],
    [246.5, -4551.5], [102.4, -4584.4], [-87.3, -4603.4], [-215.4, -4588.9], [-381.3, -4602.7],
    [-539.6, -4645.5], [-703.5, -4738.5], [-845.1, -4848.1], [-981.2, -4934.8],
    [-1153.0, -5001.8], [-1309.5, -5076.7], [-1433.8, -5165.9], [-1575.6, -5287.5],
    [-1665.5, -5424.9], [-1699.0, -5586.3], [-1747.9, -5736.6], [-1830.9, -5874.0],
    [-1960.6, -5979.7], [-2119.6, -6078.5],
];

const HOSAKA: &[[f32; 2]] = &[
    [0.0, 0.0], [67.1, 157.5], [106.4, 273.5], [197.7, 399.6], [362.7, 340.0], [388.9, 192.5],
    [375.9, 30.1], [401.1, -144.5], [472.3, -284.2], [366.2, -403.3], [264.9, -473.3],
    [137.3, -515.5], [-30.4, -577.2], [-183.5, -615.8], [-351.8, -575.6], [-500.4, -568.8],
    [-579.0, -451.7], [-603.1, -317.0], [-567.4, -176.8], [-539.8, -51.6], [-493.5, 87.6],
    [-409.3, 191.7], [-317.1, 317.2], [-209.2, 412.2], [-244.4, 579.3], [-357.5, 628.6],
    [-497.9, 668.5], [-646.2, 742.3], [-760.8, 874.1], [-821.3, 1011.8], [-839.8, 1185.5],
    [-820.2, 1319.1], [-696.7, 1349.0], [-588.6, 1247.4], [-493.3, 1128.0], [-384.3, 1004.2],
    [-205.5, 1015.4], [-70.0, 1058.2], [-36.8, 1191.9], [-30.7, 1348.1], [-83.5, 1510.9],
    [-159.1, 1629.4], [-222.7, 1745.4], [-270.0, 1856.8], [-374.9, 1987.9], [-456.7, 2098.0],
    [-547.8, 2208.1], [-617.9, 2341.2], [-648.0, 2486.3], [-669.5, 2653.3], [-735.3, 2793.7],
    [-843.5, 2911.3], [-924.6, 3011.5], [-1017.7, 3091.1], [-1100.4, 3221.1], [-1195.7, 3317.2],
    [-1270.7, 3469.8], [-1288.7, 3590.7], [-1174.7, 3704.5], [-1052.5, 3718.2],
];
